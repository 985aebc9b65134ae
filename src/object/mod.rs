use crate::model::hit_sample::HitSample;

pub use self::{banana_shower::BananaShower, juice_stream::JuiceStream, path::SliderPath};

mod banana_shower;
mod juice_stream;
mod path;

/// Width of the osu!catch playfield.
pub const PLAYFIELD_WIDTH: f32 = 512.0;

/// Data shared by every catchable object.
#[derive(Clone, Debug, PartialEq)]
pub struct PalpableObject {
    /// Start time in milliseconds.
    pub start_time: f64,
    /// Horizontal position on the playfield.
    pub x: f32,
    pub samples: Vec<HitSample>,
    pub kiai: bool,
    /// Time in milliseconds before `start_time` at which the object appears.
    pub time_preempt: f64,
    pub scale: f32,
    /// Whether catching this object requires a hyper dash towards the next.
    pub hyper_dash: bool,
    /// How many pixels the catcher has to spare before a hyper dash would be
    /// required to reach the next object.
    pub dist_to_hyper_dash: f32,
}

impl PalpableObject {
    pub const DEFAULT_PREEMPT: f64 = 1200.0;

    pub const fn new(x: f32, start_time: f64) -> Self {
        Self {
            start_time,
            x,
            samples: Vec::new(),
            kiai: false,
            time_preempt: Self::DEFAULT_PREEMPT,
            scale: 1.0,
            hyper_dash: false,
            dist_to_hyper_dash: 0.0,
        }
    }

    /// Same object but placed at another time and position with other
    /// samples. Hyper dash info is reset.
    fn derive(&self, x: f32, start_time: f64, samples: Vec<HitSample>) -> Self {
        Self {
            start_time,
            x: x.clamp(0.0, PLAYFIELD_WIDTH),
            samples,
            kiai: self.kiai,
            time_preempt: self.time_preempt,
            scale: self.scale,
            hyper_dash: false,
            dist_to_hyper_dash: 0.0,
        }
    }
}

/// An osu!catch hit object.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchHitObject {
    pub base: PalpableObject,
    pub kind: CatchObjectKind,
}

/// The variant of a [`CatchHitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum CatchObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
    Banana,
    JuiceStream(JuiceStream),
    BananaShower(BananaShower),
}

impl CatchHitObject {
    pub const fn new(base: PalpableObject, kind: CatchObjectKind) -> Self {
        Self { base, kind }
    }

    pub const fn fruit(x: f32, start_time: f64) -> Self {
        Self::new(PalpableObject::new(x, start_time), CatchObjectKind::Fruit)
    }

    pub const fn droplet(x: f32, start_time: f64) -> Self {
        Self::new(PalpableObject::new(x, start_time), CatchObjectKind::Droplet)
    }

    pub const fn tiny_droplet(x: f32, start_time: f64) -> Self {
        Self::new(
            PalpableObject::new(x, start_time),
            CatchObjectKind::TinyDroplet,
        )
    }

    pub const fn juice_stream(x: f32, start_time: f64, stream: JuiceStream) -> Self {
        Self::new(
            PalpableObject::new(x, start_time),
            CatchObjectKind::JuiceStream(stream),
        )
    }

    /// Banana showers are centered on the playfield.
    pub const fn banana_shower(start_time: f64, end_time: f64) -> Self {
        Self::new(
            PalpableObject::new(PLAYFIELD_WIDTH / 2.0, start_time),
            CatchObjectKind::BananaShower(BananaShower::new(end_time)),
        )
    }

    pub const fn start_time(&self) -> f64 {
        self.base.start_time
    }

    pub const fn x(&self) -> f32 {
        self.base.x
    }

    pub fn end_time(&self) -> f64 {
        match self.kind {
            CatchObjectKind::JuiceStream(ref stream) => self.base.start_time + stream.duration(),
            CatchObjectKind::BananaShower(ref shower) => shower.end_time,
            _ => self.base.start_time,
        }
    }

    /// Whether catching this object counts towards the combo.
    pub const fn is_combo_relevant(&self) -> bool {
        matches!(self.kind, CatchObjectKind::Fruit | CatchObjectKind::Droplet)
    }

    /// Whether this object consists of nested objects.
    pub const fn has_nested(&self) -> bool {
        matches!(
            self.kind,
            CatchObjectKind::JuiceStream(_) | CatchObjectKind::BananaShower(_)
        )
    }

    /// Generate the nested objects of juice streams and banana showers.
    ///
    /// The returned objects are sorted by start time. Objects without nested
    /// objects return an empty list. Generating is pure; calling it again
    /// yields the same objects.
    pub fn nested_objects(&self) -> Vec<CatchHitObject> {
        match self.kind {
            CatchObjectKind::JuiceStream(ref stream) => stream.nested_objects(&self.base),
            CatchObjectKind::BananaShower(ref shower) => shower.bananas(&self.base),
            _ => Vec::new(),
        }
    }
}
