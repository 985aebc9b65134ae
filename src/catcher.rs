/// The player-controlled plate that catches objects.
pub struct Catcher;

const AREA_CATCHER_SIZE: f32 = 106.75;

/// Circle sizes around 12.14 shrink the catcher to nothing.
const MIN_MOVEMENT_HALF_WIDTH: f32 = 1.0;

impl Catcher {
    pub const BASE_SPEED: f64 = 1.0;
    pub const ALLOWED_CATCH_RANGE: f32 = 0.8;

    /// Width of the area in which objects can be caught.
    pub fn calculate_catch_width(cs: f32) -> f32 {
        Self::calculate_catch_width_by_scale(Self::calculate_scale(cs))
    }

    /// Half of the catch width, further narrowed for circle sizes above 5.5
    /// to simulate imperfect catcher control.
    pub fn movement_half_width(cs: f32) -> f32 {
        let half_catcher_width = Self::calculate_catch_width(cs) * 0.5;

        let narrowed = half_catcher_width * (1.0 - (cs - 5.5).max(0.0) * 0.0625);

        narrowed.max(MIN_MOVEMENT_HALF_WIDTH)
    }

    /// Half of the full catcher width, used to determine hyper dashes.
    pub fn hyper_dash_half_width(cs: f32) -> f64 {
        f64::from(Self::calculate_catch_width(cs) / 2.0) / f64::from(Self::ALLOWED_CATCH_RANGE)
    }

    fn calculate_catch_width_by_scale(scale: f32) -> f32 {
        AREA_CATCHER_SIZE * scale.abs() * Self::ALLOWED_CATCH_RANGE
    }

    fn calculate_scale(cs: f32) -> f32 {
        (1.0 - 0.7 * ((f64::from(cs) - 5.0) / 5.0)) as f32
    }
}
