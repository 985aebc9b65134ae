use crate::{
    attributes::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    score_state::CatchScoreState,
    GameMods,
};

/// The osu!catch performance formula.
///
/// Hitresults are taken as they are, without any validation against the
/// attributes. Use [`CatchPerformance`](super::CatchPerformance) to fill in
/// missing hitresults beforehand.
pub struct CatchPerformanceCalculator {
    attrs: CatchDifficultyAttributes,
    mods: GameMods,
    state: CatchScoreState,
}

impl CatchPerformanceCalculator {
    /// Bundle difficulty attributes, mods, and the hitresults of a play.
    pub const fn new(
        attrs: CatchDifficultyAttributes,
        mods: GameMods,
        state: CatchScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }

    /// Evaluate the play.
    pub fn calculate(self) -> CatchPerformanceAttributes {
        let attributes = &self.attrs;
        let stars = attributes.stars;
        let max_combo = attributes.max_combo();

        // Relying heavily on aim
        let mut pp = (5.0 * (stars / 0.0049).max(1.0) - 4.0).powf(2.0) / 100_000.0;

        let combo_hits = self.state.combo_hits();

        // Longer maps are worth more
        let mut len_bonus = 0.95 + 0.3 * (f64::from(combo_hits) / 2500.0).min(1.0);

        if combo_hits > 2500 {
            len_bonus += (f64::from(combo_hits) / 2500.0).log10() * 0.475;
        }

        pp *= len_bonus;

        // Penalize misses exponentially
        pp *= 0.97_f64.powf(f64::from(self.state.misses));

        // Combo scaling
        if max_combo > 0 {
            pp *= (f64::from(self.state.max_combo).powf(0.8) / f64::from(max_combo).powf(0.8))
                .min(1.0);
        }

        // AR scaling
        let ar = attributes.ar;
        let mut ar_factor = 1.0;

        if ar > 9.0 {
            ar_factor += 0.1 * (ar - 9.0);
        }

        if ar > 10.0 {
            ar_factor += 0.1 * (ar - 10.0);
        } else if ar < 8.0 {
            ar_factor += 0.025 * (8.0 - ar);
        }

        pp *= ar_factor;

        // HD bonus
        if self.mods.hd() {
            if ar <= 10.0 {
                pp *= 1.05 + 0.075 * (10.0 - ar);
            } else {
                pp *= 1.01 + 0.04 * (11.0 - ar.min(11.0));
            }
        }

        // FL bonus
        if self.mods.fl() {
            pp *= 1.35 * len_bonus;
        }

        // Accuracy scaling
        pp *= self.state.accuracy().powf(5.5);

        // NF penalty
        if self.mods.nf() {
            pp *= 0.9;
        }

        CatchPerformanceAttributes {
            difficulty: self.attrs,
            pp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(stars: f64, ar: f64, max_combo: u32) -> CatchDifficultyAttributes {
        CatchDifficultyAttributes {
            stars,
            ar,
            n_fruits: max_combo,
            ..Default::default()
        }
    }

    fn full_combo(max_combo: u32) -> CatchScoreState {
        CatchScoreState {
            max_combo,
            fruits: max_combo,
            ..Default::default()
        }
    }

    fn pp(attrs: CatchDifficultyAttributes, mods: u32, state: CatchScoreState) -> f64 {
        CatchPerformanceCalculator::new(attrs, mods.into(), state)
            .calculate()
            .pp
    }

    #[test]
    fn reference_values() {
        let nomod = pp(attrs(5.0, 9.0, 100), 0, full_combo(100));
        assert!((nomod - 250.023_993_986_638_9).abs() < 1e-9, "{nomod}");

        let hidden = pp(attrs(5.0, 9.0, 100), 8, full_combo(100));
        assert!((hidden - 281.276_993_234_968_76).abs() < 1e-9, "{hidden}");
    }

    #[test]
    fn no_fail_is_flat() {
        let state = CatchScoreState {
            misses: 20,
            fruits: 80,
            max_combo: 40,
            ..Default::default()
        };

        let nomod = pp(attrs(5.0, 9.0, 100), 0, state.clone());
        let nf = pp(attrs(5.0, 9.0, 100), 1, state);

        assert!((nf - nomod * 0.9).abs() < 1e-9);
    }

    #[test]
    fn zero_max_combo_skips_combo_scaling() {
        let value = pp(attrs(5.0, 9.0, 0), 0, full_combo(0));

        // No hits at all means zero accuracy
        assert!(value.abs() < f64::EPSILON);
        assert!(value.is_finite());
    }

    #[test]
    fn high_ar_bonus() {
        let ar9 = pp(attrs(5.0, 9.0, 100), 0, full_combo(100));
        let ar10 = pp(attrs(5.0, 10.0, 100), 0, full_combo(100));
        let ar11 = pp(attrs(5.0, 11.0, 100), 0, full_combo(100));

        assert!((ar10 / ar9 - 1.1).abs() < 1e-9);
        assert!((ar11 / ar9 - 1.3).abs() < 1e-9);
    }

    #[test]
    fn low_ar_bonus() {
        let ar8 = pp(attrs(5.0, 8.0, 100), 0, full_combo(100));
        let ar4 = pp(attrs(5.0, 4.0, 100), 0, full_combo(100));

        assert!((ar4 / ar8 - 1.1).abs() < 1e-9);
    }

    #[test]
    fn statistics_are_not_rebalanced() {
        // 105 combo objects on a map with max combo 100
        let state = CatchScoreState {
            max_combo: 60,
            fruits: 100,
            misses: 5,
            ..Default::default()
        };

        let value = pp(attrs(5.0, 9.0, 100), 0, state);

        assert!((value - 109.166_905_701_678_54).abs() < 1e-9, "{value}");
    }

    #[test]
    fn flashlight_uses_length_bonus() {
        let nomod = pp(attrs(5.0, 9.0, 100), 0, full_combo(100));
        let fl = pp(attrs(5.0, 9.0, 100), 1024, full_combo(100));

        let len_bonus = 0.95 + 0.3 * (100.0 / 2500.0);

        assert!((fl / nomod - 1.35 * len_bonus).abs() < 1e-9);
    }
}
