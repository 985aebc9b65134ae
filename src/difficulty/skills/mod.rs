use std::cmp::Ordering;

use super::object::CatchDifficultyObject;

pub use self::movement::Movement;

mod movement;

/// A skill that accumulates difficulty over [`CatchDifficultyObject`]s.
pub trait Skill {
    /// Process the next object. Objects must be processed in chronological
    /// order.
    fn process(&mut self, curr: &CatchDifficultyObject);

    /// The aggregated difficulty of all processed objects.
    fn difficulty_value(&self) -> f64;
}

pub(crate) trait StrainSkill: Sized + Skill {
    const DECAY_WEIGHT: f64;
    const SECTION_LEN: f64;

    fn curr_section_end(&self) -> f64;
    fn curr_section_end_mut(&mut self) -> &mut f64;

    fn curr_section_peak(&self) -> f64;
    fn curr_section_peak_mut(&mut self) -> &mut f64;

    fn strain_peaks(&self) -> &[f64];
    fn strain_peaks_mut(&mut self) -> &mut Vec<f64>;

    fn strain_value_at(&mut self, curr: &CatchDifficultyObject) -> f64;

    fn calculate_initial_strain(&self, time: f64, curr: &CatchDifficultyObject) -> f64;

    fn process(&mut self, curr: &CatchDifficultyObject) {
        // * The first object doesn't generate a strain, so we begin with an incremented section end
        if curr.idx == 0 {
            *self.curr_section_end_mut() =
                (curr.start_time / Self::SECTION_LEN).ceil() * Self::SECTION_LEN;
        }

        while curr.start_time > self.curr_section_end() {
            self.save_curr_peak();
            self.start_new_section_from(self.curr_section_end(), curr);
            *self.curr_section_end_mut() += Self::SECTION_LEN;
        }

        *self.curr_section_peak_mut() = self.strain_value_at(curr).max(self.curr_section_peak());
    }

    fn save_curr_peak(&mut self) {
        let curr_section_peak = self.curr_section_peak();
        self.strain_peaks_mut().push(curr_section_peak);
    }

    fn start_new_section_from(&mut self, time: f64, curr: &CatchDifficultyObject) {
        *self.curr_section_peak_mut() = self.calculate_initial_strain(time, curr);
    }

    /// All section peaks including the current one.
    fn curr_strain_peaks(&self) -> Vec<f64> {
        let mut peaks = Vec::with_capacity(self.strain_peaks().len() + 1);
        peaks.extend_from_slice(self.strain_peaks());
        peaks.push(self.curr_section_peak());

        peaks
    }

    fn difficulty_value(&self) -> f64 {
        let mut difficulty = 0.0;
        let mut weight = 1.0;

        // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
        // * These sections will not contribute to the difficulty.
        let mut peaks = self.curr_strain_peaks();
        peaks.retain(|&peak| peak > 0.0);
        peaks.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        // * Difficulty is the weighted sum of the highest strains from every section.
        // * We're sorting from highest to lowest strain.
        for strain in peaks {
            difficulty += strain * weight;
            weight *= Self::DECAY_WEIGHT;
        }

        difficulty
    }
}

pub(crate) trait StrainDecaySkill: StrainSkill {
    const SKILL_MULTIPLIER: f64;
    const STRAIN_DECAY_BASE: f64;

    fn curr_strain(&self) -> f64;
    fn curr_strain_mut(&mut self) -> &mut f64;

    fn strain_value_of(&mut self, curr: &CatchDifficultyObject) -> f64;

    fn strain_value_at(&mut self, curr: &CatchDifficultyObject) -> f64 {
        *self.curr_strain_mut() *= Self::strain_decay(curr.delta_time);
        *self.curr_strain_mut() += self.strain_value_of(curr) * Self::SKILL_MULTIPLIER;

        self.curr_strain()
    }

    fn calculate_initial_strain(&self, time: f64, curr: &CatchDifficultyObject) -> f64 {
        let prev_start_time = curr.start_time - curr.delta_time;

        self.curr_strain() * Self::strain_decay(time - prev_start_time)
    }

    fn strain_decay(ms: f64) -> f64 {
        Self::STRAIN_DECAY_BASE.powf(ms / 1000.0)
    }
}
