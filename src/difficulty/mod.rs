use crate::{
    attributes::CatchDifficultyAttributes, catcher::Catcher, model::beatmap::Beatmap,
    strains::CatchStrains, GameMods,
};

use self::{
    preprocess::{CatchObjects, DifficultyObjects},
    skills::{Movement, Skill},
};

pub use self::object::{CatchDifficultyObject, LastObject};

pub mod object;
pub mod preprocess;
pub mod skills;

const STAR_SCALING_FACTOR: f64 = 0.153;

/// Difficulty calculator on osu!catch maps.
///
/// # Example
///
/// ```
/// use catch_pp::{Beatmap, CatchDifficulty};
/// use catch_pp::object::CatchHitObject;
///
/// let map = Beatmap {
///     hit_objects: vec![
///         CatchHitObject::fruit(64.0, 1000.0),
///         CatchHitObject::fruit(448.0, 1300.0),
///         CatchHitObject::fruit(64.0, 1600.0),
///     ],
///     ..Default::default()
/// };
///
/// let attrs = CatchDifficulty::new()
///     .mods(16 + 64) // HRDT
///     .calculate(&map);
///
/// assert_eq!(attrs.max_combo(), 3);
/// assert!(attrs.stars > 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct CatchDifficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    /// Clamped between 0.01 and 100.
    clock_rate: Option<f64>,
    ar: Option<ModsDependent>,
    cs: Option<ModsDependent>,
}

/// A value that may or may not already include mod adjustments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f32,
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

impl CatchDifficulty {
    const MIN_CLOCK_RATE: f64 = 0.01;
    const MAX_CLOCK_RATE: f64 = 100.0;
    const MIN_DIFFICULTY: f32 = -20.0;
    const MAX_DIFFICULTY: f32 = 20.0;

    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
            ar: None,
            cs: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`GameMods`]
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// Only fruits and droplets count as objects.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        let clock_rate = clock_rate.clamp(Self::MIN_CLOCK_RATE, Self::MAX_CLOCK_RATE);

        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: Some(ModsDependent {
                value: ar.clamp(Self::MIN_DIFFICULTY, Self::MAX_DIFFICULTY),
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: Some(ModsDependent {
                value: cs.clamp(Self::MIN_DIFFICULTY, Self::MAX_DIFFICULTY),
                with_mods,
            }),
            ..self
        }
    }

    pub const fn get_mods(&self) -> GameMods {
        self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub const fn get_passed_objects(&self) -> Option<u32> {
        self.passed_objects
    }

    pub const fn get_ar(&self) -> Option<ModsDependent> {
        self.ar
    }

    pub const fn get_cs(&self) -> Option<ModsDependent> {
        self.cs
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, map: &Beatmap) -> CatchDifficultyAttributes {
        let DifficultyValues { skill, mut attrs } = DifficultyValues::calculate(self, map);

        attrs.stars = star_rating(skill.difficulty_value());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            mods = ?attrs.mods,
            stars = attrs.stars,
            max_combo = attrs.max_combo(),
            "Calculated osu!catch difficulty"
        );

        attrs
    }

    /// Perform the difficulty calculation for every combination of
    /// difficulty-changing mods.
    ///
    /// Mods that are already specified are ignored; everything else such as
    /// overrides or passed objects still applies.
    pub fn calculate_all(&self, map: &Beatmap) -> Vec<CatchDifficultyAttributes> {
        GameMods::difficulty_mod_combinations()
            .into_iter()
            .map(|mods| {
                let difficulty = Self {
                    mods,
                    clock_rate: None,
                    ..self.clone()
                };

                difficulty.calculate(map)
            })
            .collect()
    }

    /// Perform the difficulty calculation but instead of evaluating strain
    /// values, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> CatchStrains {
        let DifficultyValues { skill, .. } = DifficultyValues::calculate(self, map);

        CatchStrains {
            movement: skill.section_peaks(),
        }
    }
}

fn star_rating(difficulty_value: f64) -> f64 {
    difficulty_value.sqrt() * STAR_SCALING_FACTOR
}

/// The result of running a [`Skill`] over a map, alongside the map's
/// attributes without star rating.
pub struct DifficultyValues<S> {
    pub skill: S,
    pub attrs: CatchDifficultyAttributes,
}

impl DifficultyValues<Movement> {
    pub fn calculate(difficulty: &CatchDifficulty, map: &Beatmap) -> Self {
        Self::calculate_with(difficulty, map, Movement::new)
    }
}

impl<S: Skill> DifficultyValues<S> {
    /// Process the map with the skill created by `new_skill`, given the
    /// catcher's half width and the clock rate.
    pub fn calculate_with<F>(difficulty: &CatchDifficulty, map: &Beatmap, new_skill: F) -> Self
    where
        F: FnOnce(f32, f64) -> S,
    {
        let clock_rate = difficulty.get_clock_rate();

        let mut attrs = CatchDifficultyAttributes {
            mods: difficulty.get_mods(),
            ..Default::default()
        };

        let map_attrs = map
            .attributes()
            .difficulty(difficulty)
            .build();

        let cs = map_attrs.cs as f32;
        let half_catcher_width = Catcher::movement_half_width(cs);

        let mut skill = new_skill(half_catcher_width, clock_rate);

        // Only the mods are set for empty maps
        if map.hit_objects.is_empty() {
            return Self { skill, attrs };
        }

        attrs.ar = map_attrs.ar;

        let CatchObjects { objects, count } =
            CatchObjects::new(map, cs, difficulty.get_passed_objects());

        attrs.set_object_count(&count);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_objects = objects.len(),
            n_fruits = count.fruits,
            n_droplets = count.droplets,
            n_tiny_droplets = count.tiny_droplets,
            half_catcher_width,
            clock_rate,
            "Preprocessed osu!catch objects"
        );

        for curr in DifficultyObjects::new(&objects, half_catcher_width, clock_rate) {
            skill.process(&curr);
        }

        Self { skill, attrs }
    }
}
