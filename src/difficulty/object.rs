use crate::object::PalpableObject;

/// A movement from one combo-relevant object to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub normalized_pos: f32,
    pub last_normalized_pos: f32,
    pub strain_time: f64,
    pub last_object: LastObject,
}

impl CatchDifficultyObject {
    pub const NORMALIZED_HITOBJECT_RADIUS: f32 = 41.0;

    pub fn new(
        hit_object: &PalpableObject,
        last_object: &PalpableObject,
        clock_rate: f64,
        scaling_factor: f32,
        idx: usize,
    ) -> Self {
        let normalized_pos = hit_object.x * scaling_factor;
        let last_normalized_pos = last_object.x * scaling_factor;

        let start_time = hit_object.start_time / clock_rate;
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;

        // * Every strain interval is hard capped at the equivalent of 375 BPM streaming speed as a safety measure
        let strain_time = delta_time.max(40.0);

        let last_object = LastObject {
            hyper_dash: last_object.hyper_dash,
            dist_to_hyper_dash: last_object.dist_to_hyper_dash,
        };

        Self {
            idx,
            start_time,
            delta_time,
            normalized_pos,
            last_normalized_pos,
            strain_time,
            last_object,
        }
    }

    /// Horizontal distance between both objects relative to the catcher.
    pub fn movement(&self) -> f32 {
        self.normalized_pos - self.last_normalized_pos
    }
}

/// Hyper dash info of the previous object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LastObject {
    pub hyper_dash: bool,
    pub dist_to_hyper_dash: f32,
}
