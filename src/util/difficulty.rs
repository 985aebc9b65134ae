/// Maps a difficulty setting in `0..=10` onto a range whose value at `5` is
/// `mid`, piecewise linear on both halves.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

pub const PREEMPT_MIN: f64 = 1800.0;
pub const PREEMPT_MID: f64 = 1200.0;
pub const PREEMPT_MAX: f64 = 450.0;

/// Preempt time in milliseconds for the given approach rate.
pub fn ar_to_preempt(ar: f64) -> f64 {
    difficulty_range(ar, PREEMPT_MIN, PREEMPT_MID, PREEMPT_MAX)
}

/// Inverse of [`ar_to_preempt`].
pub fn preempt_to_ar(preempt: f64) -> f64 {
    if preempt > PREEMPT_MID {
        -(preempt - PREEMPT_MIN) / 120.0
    } else {
        -(preempt - PREEMPT_MID) / 150.0 + 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preempt_bounds() {
        assert!((ar_to_preempt(0.0) - 1800.0).abs() < f64::EPSILON);
        assert!((ar_to_preempt(5.0) - 1200.0).abs() < f64::EPSILON);
        assert!((ar_to_preempt(10.0) - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn preempt_inverts() {
        for ar in [0.0, 2.5, 5.0, 7.3, 9.0, 10.0] {
            assert!((preempt_to_ar(ar_to_preempt(ar)) - ar).abs() < 1e-9, "ar={ar}");
        }
    }
}
