use crate::{
    difficulty::{CatchDifficulty, ModsDependent},
    util::difficulty::{ar_to_preempt, preempt_to_ar},
    GameMods,
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate with respect to mods and clock rate.
    pub ar: f64,
    /// The circle size.
    pub cs: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// Time in milliseconds that objects are visible before they have to be
    /// caught.
    pub preempt: f64,
}

/// A builder for [`BeatmapAttributes`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    cs: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// Attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            mods: GameMods::DEFAULT,
            clock_rate: None,
        }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub const fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            cs: ModsDependent::new(map.cs),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Specify a custom clock rate.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify all settings through [`CatchDifficulty`].
    pub fn difficulty(self, difficulty: &CatchDifficulty) -> Self {
        Self {
            ar: difficulty.get_ar().unwrap_or(self.ar),
            cs: difficulty.get_cs().unwrap_or(self.cs),
            mods: difficulty.get_mods(),
            clock_rate: Some(difficulty.get_clock_rate()),
        }
    }

    /// Circle size after applying mods.
    pub fn modded_cs(&self) -> f32 {
        let mut cs = self.cs.value;

        if !self.cs.with_mods {
            if self.mods.hr() {
                cs = (cs * 1.3).min(10.0);
            } else if self.mods.ez() {
                cs *= 0.5;
            }
        }

        cs
    }

    /// Approach rate after applying mods but before considering the clock
    /// rate.
    pub fn modded_ar(&self) -> f32 {
        let mut ar = self.ar.value;

        if !self.ar.with_mods {
            if self.mods.hr() {
                ar = (ar * 1.4).min(10.0);
            } else if self.mods.ez() {
                ar *= 0.5;
            }
        }

        ar
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let clock_rate = self.clock_rate.unwrap_or_else(|| self.mods.clock_rate());
        let ar_clock_rate = if self.ar.with_mods { 1.0 } else { clock_rate };

        let preempt = ar_to_preempt(f64::from(self.modded_ar())) / ar_clock_rate;

        BeatmapAttributes {
            ar: preempt_to_ar(preempt),
            cs: f64::from(self.modded_cs()),
            clock_rate,
            preempt,
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn consider_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, false)
            .mods(64)
            .build();

        let expected = 10.0;

        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn skip_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, true)
            .mods(64)
            .build();

        let expected = 8.5;

        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn hardrock_and_easy() {
        let hr = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .cs(4.0, false)
            .mods(16)
            .build();

        assert!(hr.ar.eq(10.0), "{}", hr.ar);
        assert!((hr.cs - 5.2).abs() < 1e-6, "{}", hr.cs);

        let ez = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .cs(4.0, false)
            .mods(2)
            .build();

        assert!((ez.ar - 4.5).abs() < 1e-6, "{}", ez.ar);
        assert!((ez.cs - 2.0).abs() < 1e-6, "{}", ez.cs);
    }

    #[test]
    fn custom_clock_rate() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(5.0, false)
            .mods(64)
            .clock_rate(1.2)
            .build();

        assert!(attrs.clock_rate.eq(1.2));
        assert!((attrs.preempt - 1000.0).abs() < 1e-9);
    }
}
