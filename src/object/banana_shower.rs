use super::{CatchHitObject, CatchObjectKind, PalpableObject};

/// A shower of bananas spanning from the object's start time until
/// `end_time`.
#[derive(Clone, Debug, PartialEq)]
pub struct BananaShower {
    pub end_time: f64,
}

impl BananaShower {
    pub const fn new(end_time: f64) -> Self {
        Self { end_time }
    }

    /// Start times of all bananas for a shower starting at `start_time`.
    fn banana_times(&self, start_time: f64) -> Vec<f64> {
        // * Int truncation added to match osu!stable.
        let start_time = start_time as i32;
        let end_time = self.end_time as i32;
        let mut spacing = f64::from(end_time - start_time);

        while spacing > 100.0 {
            spacing /= 2.0;
        }

        if spacing <= 0.0 {
            return Vec::new();
        }

        let end_time = f64::from(end_time);
        let mut time = f64::from(start_time);
        let mut times = Vec::new();

        while time <= end_time {
            times.push(time);
            time += spacing;
        }

        times
    }

    /// Amount of bananas for a shower starting at `start_time`.
    pub fn n_bananas(&self, start_time: f64) -> usize {
        self.banana_times(start_time).len()
    }

    pub(super) fn bananas(&self, base: &PalpableObject) -> Vec<CatchHitObject> {
        self.banana_times(base.start_time)
            .into_iter()
            .map(|time| {
                let banana = base.derive(base.x, time, base.samples.clone());

                CatchHitObject::new(banana, CatchObjectKind::Banana)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing() {
        let shower = CatchHitObject::banana_shower(1000.0, 1400.0);
        let bananas = shower.nested_objects();

        // 400 -> 200 -> 100
        assert_eq!(bananas.len(), 5);
        assert!((bananas[4].start_time() - 1400.0).abs() < f64::EPSILON);
        assert!(bananas
            .iter()
            .all(|banana| matches!(banana.kind, CatchObjectKind::Banana)));
    }

    #[test]
    fn truncated_times() {
        let shower = BananaShower::new(1100.9);

        assert_eq!(shower.n_bananas(1000.7), 2);
    }

    #[test]
    fn empty_duration() {
        assert_eq!(BananaShower::new(500.0).n_bananas(500.0), 0);
        assert_eq!(BananaShower::new(400.0).n_bananas(500.0), 0);
    }

    #[test]
    fn deterministic() {
        let shower = CatchHitObject::banana_shower(123.4, 5678.9);

        assert_eq!(shower.nested_objects(), shower.nested_objects());
    }
}
