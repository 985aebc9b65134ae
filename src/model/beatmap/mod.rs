use crate::{
    object::{CatchHitObject, CatchObjectKind},
    util::difficulty::ar_to_preempt,
};

pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder},
    validity::InvalidBeatmap,
};

use super::control_point::{
    difficulty_point_at, effect_point_at, timing_point_at, DifficultyPoint, EffectPoint,
    TimingPoint,
};

mod attributes;
mod validity;

/// All beatmap data that is relevant for difficulty and performance
/// calculation.
///
/// Hit objects must be sorted by start time. Decoding `.osu` files is up to
/// the caller; [`Beatmap::check_validity`] can be used to verify the result.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    // Difficulty
    pub ar: f32,
    pub cs: f32,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,

    // TimingPoints
    pub timing_points: Vec<TimingPoint>,
    pub difficulty_points: Vec<DifficultyPoint>,
    pub effect_points: Vec<EffectPoint>,

    // HitObjects
    pub hit_objects: Vec<CatchHitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Finds the [`TimingPoint`] that is active at the given time.
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        timing_point_at(&self.timing_points, time)
    }

    /// Finds the [`DifficultyPoint`] that is active at the given time.
    pub fn difficulty_point_at(&self, time: f64) -> Option<&DifficultyPoint> {
        difficulty_point_at(&self.difficulty_points, time)
    }

    /// Finds the [`EffectPoint`] that is active at the given time.
    pub fn effect_point_at(&self, time: f64) -> Option<&EffectPoint> {
        effect_point_at(&self.effect_points, time)
    }

    /// Populate the timing-dependent fields of all hit objects.
    ///
    /// Sets preempt time, scale, and kiai of every object, as well as
    /// velocity and tick distance of juice streams based on the active
    /// control points.
    pub fn apply_defaults(&mut self) {
        let time_preempt = ar_to_preempt(f64::from(self.ar));
        let scale = (1.0 - 0.7 * (self.cs - 5.0) / 5.0) / 2.0;

        for i in 0..self.hit_objects.len() {
            let start_time = self.hit_objects[i].start_time();

            let kiai = self
                .effect_point_at(start_time)
                .map_or(EffectPoint::DEFAULT_KIAI, |point| point.kiai);

            let beat_len = self
                .timing_point_at(start_time)
                .map_or(TimingPoint::DEFAULT_BEAT_LEN, |point| point.beat_len);

            let slider_velocity = self
                .difficulty_point_at(start_time)
                .map_or(DifficultyPoint::DEFAULT_SLIDER_VELOCITY, |point| {
                    point.slider_velocity
                });

            let (slider_multiplier, slider_tick_rate) =
                (self.slider_multiplier, self.slider_tick_rate);

            let h = &mut self.hit_objects[i];
            h.base.time_preempt = time_preempt;
            h.base.scale = scale;
            h.base.kiai = kiai;

            if let CatchObjectKind::JuiceStream(ref mut stream) = h.kind {
                stream.apply_defaults(beat_len, slider_velocity, slider_multiplier, slider_tick_rate);
            }
        }
    }

    /// Count all catchable objects, including the nested objects of juice
    /// streams and banana showers.
    pub fn object_count(&self) -> ObjectCount {
        let mut count = ObjectCount::default();

        self.hit_objects.iter().for_each(|h| count.record(h));

        count
    }

    /// The maximum achievable combo i.e. the amount of fruits and droplets.
    pub fn max_combo(&self) -> u32 {
        self.object_count().max_combo()
    }

    /// Verify that the map upholds the assumptions of difficulty and
    /// performance calculation.
    pub fn check_validity(&self) -> Result<(), InvalidBeatmap> {
        let res = InvalidBeatmap::check(self);

        #[cfg(feature = "tracing")]
        if let Err(ref err) = res {
            tracing::warn!(%err, "Invalid beatmap");
        }

        res
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            ar: 5.0,
            cs: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
            timing_points: Vec::new(),
            difficulty_points: Vec::new(),
            effect_points: Vec::new(),
            hit_objects: Vec::new(),
        }
    }
}

/// Amount of catchable objects in a [`Beatmap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCount {
    pub fruits: u32,
    pub droplets: u32,
    pub tiny_droplets: u32,
    pub bananas: u32,
}

impl ObjectCount {
    pub const fn max_combo(&self) -> u32 {
        self.fruits + self.droplets
    }

    pub(crate) fn record(&mut self, h: &CatchHitObject) {
        match h.kind {
            CatchObjectKind::Fruit => self.fruits += 1,
            CatchObjectKind::Droplet => self.droplets += 1,
            CatchObjectKind::TinyDroplet => self.tiny_droplets += 1,
            CatchObjectKind::Banana => self.bananas += 1,
            CatchObjectKind::JuiceStream(_) => {
                h.nested_objects().iter().for_each(|nested| self.record(nested));
            }
            CatchObjectKind::BananaShower(ref shower) => {
                self.bananas += shower.n_bananas(h.start_time()) as u32;
            }
        }
    }
}
