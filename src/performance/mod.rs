use crate::{
    attributes::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    difficulty::CatchDifficulty,
    model::{beatmap::Beatmap, mods::GameMods},
    score_state::CatchScoreState,
    util::map_or_attrs::MapOrAttrs,
};

pub use self::calculator::CatchPerformanceCalculator;

mod calculator;

/// Performance calculator on osu!catch maps.
///
/// Hitresults that are fully given, e.g. through [`state`], are evaluated
/// as they are. Otherwise, the missing ones are derived from the map's
/// object counts and, for tiny droplets, the requested accuracy.
///
/// [`state`]: CatchPerformance::state
///
/// # Example
///
/// ```
/// use catch_pp::{Beatmap, CatchDifficulty, CatchPerformance};
/// use catch_pp::object::CatchHitObject;
///
/// let hit_objects = (0..100)
///     .map(|i| {
///         let x = if i % 2 == 0 { 64.0 } else { 448.0 };
///
///         CatchHitObject::fruit(x, f64::from(i) * 300.0)
///     })
///     .collect();
///
/// let map = Beatmap {
///     hit_objects,
///     ..Default::default()
/// };
///
/// let attrs = CatchDifficulty::new().mods(8).calculate(&map);
///
/// let perf = CatchPerformance::new(attrs)
///     .mods(8) // HD, same as before
///     .accuracy(98.5)
///     .misses(2)
///     .calculate();
///
/// assert!(perf.pp() > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct CatchPerformance<'map> {
    map_or_attrs: MapOrAttrs<'map>,
    difficulty: CatchDifficulty,
    acc: Option<f64>,
    combo: Option<u32>,
    fruits: Option<u32>,
    droplets: Option<u32>,
    tiny_droplets: Option<u32>,
    tiny_droplet_misses: Option<u32>,
    misses: Option<u32>,
}

impl<'map> CatchPerformance<'map> {
    /// Start from a [`&Beatmap`](Beatmap) or from attributes that were
    /// calculated for the same map and [`CatchDifficulty`] settings.
    ///
    /// A map requires a difficulty calculation on the first use.
    pub fn new(map_or_attrs: impl Into<MapOrAttrs<'map>>) -> Self {
        Self {
            map_or_attrs: map_or_attrs.into(),
            difficulty: CatchDifficulty::new(),
            acc: None,
            combo: None,
            fruits: None,
            droplets: None,
            tiny_droplets: None,
            tiny_droplet_misses: None,
            misses: None,
        }
    }

    /// Mods of the play, e.g. `u32` bits or [`GameMods`].
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.difficulty = self.difficulty.mods(mods);

        self
    }

    /// Highest combo reached during the play.
    ///
    /// Defaults to the map's max combo minus misses.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Caught fruits.
    pub const fn fruits(mut self, n_fruits: u32) -> Self {
        self.fruits = Some(n_fruits);

        self
    }

    /// Caught droplets.
    pub const fn droplets(mut self, n_droplets: u32) -> Self {
        self.droplets = Some(n_droplets);

        self
    }

    /// Caught tiny droplets.
    pub const fn tiny_droplets(mut self, n_tiny_droplets: u32) -> Self {
        self.tiny_droplets = Some(n_tiny_droplets);

        self
    }

    /// Missed tiny droplets.
    pub const fn tiny_droplet_misses(mut self, n_tiny_droplet_misses: u32) -> Self {
        self.tiny_droplet_misses = Some(n_tiny_droplet_misses);

        self
    }

    /// Missed fruits and droplets.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Replace all difficulty settings.
    pub fn difficulty(mut self, difficulty: CatchDifficulty) -> Self {
        self.difficulty = difficulty;

        self
    }

    /// See [`CatchDifficulty::passed_objects`].
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.difficulty = self.difficulty.passed_objects(passed_objects);

        self
    }

    /// See [`CatchDifficulty::clock_rate`].
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.difficulty = self.difficulty.clock_rate(clock_rate);

        self
    }

    /// See [`CatchDifficulty::ar`].
    pub fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.ar(ar, with_mods);

        self
    }

    /// See [`CatchDifficulty::cs`].
    pub fn cs(mut self, cs: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.cs(cs, with_mods);

        self
    }

    /// Use the complete hitresults of a play.
    ///
    /// These are evaluated unchanged, even if they don't add up to the map's
    /// object counts.
    #[allow(clippy::needless_pass_by_value)]
    pub const fn state(mut self, state: CatchScoreState) -> Self {
        self.combo = Some(state.max_combo);
        self.fruits = Some(state.fruits);
        self.droplets = Some(state.droplets);
        self.tiny_droplets = Some(state.tiny_droplets);
        self.tiny_droplet_misses = Some(state.tiny_droplet_misses);
        self.misses = Some(state.misses);

        self
    }

    /// Accuracy between `0.0` and `100.0`.
    ///
    /// Only used to pick the amount of tiny droplets if those were not
    /// given.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// The hitresults that [`calculate`](Self::calculate) will evaluate.
    ///
    /// A map's difficulty attributes are calculated once and kept for later
    /// calls.
    pub fn generate_state(&mut self) -> CatchScoreState {
        let attrs = self.attributes();

        let state = self
            .given_state(&attrs)
            .unwrap_or_else(|| self.fill_state(&attrs));

        self.combo = Some(state.max_combo);
        self.fruits = Some(state.fruits);
        self.droplets = Some(state.droplets);
        self.tiny_droplets = Some(state.tiny_droplets);
        self.tiny_droplet_misses = Some(state.tiny_droplet_misses);
        self.misses = Some(state.misses);

        state
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> CatchPerformanceAttributes {
        let state = self.generate_state();
        let attrs = self.attributes();
        let mods = self.difficulty.get_mods();

        let attrs = CatchPerformanceCalculator::new(attrs, mods, state).calculate();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pp = attrs.pp,
            stars = attrs.difficulty.stars,
            "Calculated osu!catch performance"
        );

        attrs
    }

    fn attributes(&mut self) -> CatchDifficultyAttributes {
        match self.map_or_attrs {
            MapOrAttrs::Map(map) => {
                let attrs = self.difficulty.calculate(map);
                self.map_or_attrs = MapOrAttrs::Attrs(attrs.clone());

                attrs
            }
            MapOrAttrs::Attrs(ref attrs) => attrs.clone(),
        }
    }

    /// All hitresults were provided so only the combo may be missing.
    fn given_state(&self, attrs: &CatchDifficultyAttributes) -> Option<CatchScoreState> {
        let misses = self.misses?;

        Some(CatchScoreState {
            max_combo: self
                .combo
                .unwrap_or_else(|| attrs.max_combo().saturating_sub(misses)),
            fruits: self.fruits?,
            droplets: self.droplets?,
            tiny_droplets: self.tiny_droplets?,
            tiny_droplet_misses: self.tiny_droplet_misses?,
            misses,
        })
    }

    fn fill_state(&self, attrs: &CatchDifficultyAttributes) -> CatchScoreState {
        let n_objects = attrs.max_combo();
        let misses = self.misses.map_or(0, |misses| misses.min(n_objects));
        let (fruits, droplets) = self.fill_combo_hits(attrs, misses);

        let caught = fruits + droplets;
        let n_tiny = attrs.n_tiny_droplets;

        let tiny_hits = match (self.tiny_droplets, self.tiny_droplet_misses) {
            // Unaccounted tiny droplets were caught
            (_, Some(tiny_misses)) => n_tiny - tiny_misses.min(n_tiny),
            (Some(tiny_hits), None) => tiny_hits.min(n_tiny),
            (None, None) => self.acc.map_or(n_tiny, |acc| {
                closest_tiny_droplets(acc, caught, misses, n_tiny)
            }),
        };

        CatchScoreState {
            max_combo: self.combo.unwrap_or(n_objects - misses),
            fruits,
            droplets,
            tiny_droplets: tiny_hits,
            tiny_droplet_misses: n_tiny - tiny_hits,
            misses,
        }
    }

    /// Fruits and droplets such that they add up to the map's combo together
    /// with `misses`.
    fn fill_combo_hits(&self, attrs: &CatchDifficultyAttributes, misses: u32) -> (u32, u32) {
        let remaining = attrs.max_combo() - misses;

        match (self.fruits, self.droplets) {
            (Some(fruits), Some(droplets)) => {
                let droplets = droplets.min(remaining);
                let fruits = fruits.min(remaining - droplets);

                let unknown = remaining - fruits - droplets;
                let extra_droplets = unknown.min(attrs.n_droplets.saturating_sub(droplets));

                (fruits + unknown - extra_droplets, droplets + extra_droplets)
            }
            (Some(fruits), None) => {
                let fruits = fruits.min(remaining);

                (fruits, remaining - fruits)
            }
            (None, Some(droplets)) => {
                let droplets = droplets.min(remaining);

                (remaining - droplets, droplets)
            }
            // Misses are droplets first
            (None, None) => {
                let droplets = attrs.n_droplets.saturating_sub(misses);

                (remaining - droplets, droplets)
            }
        }
    }
}

/// Accuracy is linear in the amount of caught tiny droplets so rounding the
/// exact solution gives the closest match.
fn closest_tiny_droplets(acc: f64, caught: u32, misses: u32, n_tiny: u32) -> u32 {
    let total = f64::from(caught + misses + n_tiny);
    let exact = acc * total - f64::from(caught);

    exact.round().clamp(0.0, f64::from(n_tiny)) as u32
}

impl<'map> From<&'map Beatmap> for CatchPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::new(map)
    }
}

impl From<CatchDifficultyAttributes> for CatchPerformance<'_> {
    fn from(attrs: CatchDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<CatchPerformanceAttributes> for CatchPerformance<'_> {
    fn from(attrs: CatchPerformanceAttributes) -> Self {
        Self::new(attrs)
    }
}
