/// Effect-related info about this control point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EffectPoint {
    pub time: f64,
    pub kiai: bool,
}

impl EffectPoint {
    pub const DEFAULT_KIAI: bool = false;

    pub const fn new(time: f64, kiai: bool) -> Self {
        Self { time, kiai }
    }
}

pub fn effect_point_at(points: &[EffectPoint], time: f64) -> Option<&EffectPoint> {
    points
        .binary_search_by(|probe| probe.time.total_cmp(&time))
        .map_or_else(|i| i.checked_sub(1), Some)
        .map(|i| &points[i])
}
