/// Aggregation for a score's current state i.e. what is the maximum combo
/// and what are the current hitresults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatchScoreState {
    /// Maximum combo that the score has had so far.
    /// **Not** the maximum possible combo of the map so far.
    ///
    /// Note that only fruits and droplets are considered for osu!catch combo.
    pub max_combo: u32,
    /// Amount of caught fruits (greats).
    pub fruits: u32,
    /// Amount of caught droplets (large ticks).
    pub droplets: u32,
    /// Amount of caught tiny droplets (small ticks).
    pub tiny_droplets: u32,
    /// Amount of missed tiny droplets.
    pub tiny_droplet_misses: u32,
    /// Amount of missed fruits and droplets.
    pub misses: u32,
}

impl CatchScoreState {
    /// Create a new empty score state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.successful_hits() + self.tiny_droplet_misses + self.misses
    }

    /// Amount of caught objects, including tiny droplets.
    pub const fn successful_hits(&self) -> u32 {
        self.fruits + self.droplets + self.tiny_droplets
    }

    /// Amount of objects that affect combo i.e. fruits, droplets, and misses.
    pub const fn combo_hits(&self) -> u32 {
        self.fruits + self.droplets + self.misses
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = self.successful_hits();

        (f64::from(numerator) / f64::from(total_hits)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accuracy() {
        assert!(CatchScoreState::new().accuracy().abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy() {
        let state = CatchScoreState {
            max_combo: 10,
            fruits: 6,
            droplets: 2,
            tiny_droplets: 1,
            tiny_droplet_misses: 1,
            misses: 0,
        };

        assert_eq!(state.total_hits(), 10);
        assert_eq!(state.combo_hits(), 8);
        assert!((state.accuracy() - 0.9).abs() < f64::EPSILON);
    }
}
