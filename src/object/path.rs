use crate::model::pos::Pos2;

/// Linear path of a juice stream.
///
/// Control points are relative to the stream's position. If an expected
/// distance is given, it is used as the path's length: the path is cut short
/// if the drawn points are longer, and extended along its last segment if
/// they're shorter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderPath {
    control_points: Vec<Pos2>,
    expected_dist: Option<f64>,
    cumulative_len: Vec<f64>,
}

impl SliderPath {
    pub fn new(control_points: Vec<Pos2>, expected_dist: Option<f64>) -> Self {
        let mut cumulative_len = Vec::with_capacity(control_points.len());
        let mut len = 0.0;
        let mut prev = None;

        for &pos in &control_points {
            if let Some(prev) = prev.replace(pos) {
                len += f64::from(pos.distance(prev));
            }

            cumulative_len.push(len);
        }

        Self {
            control_points,
            expected_dist,
            cumulative_len,
        }
    }

    pub fn control_points(&self) -> &[Pos2] {
        &self.control_points
    }

    /// Length of the drawn control points.
    pub fn calculated_dist(&self) -> f64 {
        self.cumulative_len.last().copied().unwrap_or(0.0)
    }

    /// Length of the path.
    pub fn dist(&self) -> f64 {
        self.expected_dist.unwrap_or_else(|| self.calculated_dist())
    }

    /// Overwrite the path's length.
    pub fn set_dist(&mut self, dist: f64) {
        self.expected_dist = Some(dist);
    }

    /// Position on the path for `progress` in `0.0..=1.0`, relative to the
    /// path's start.
    pub fn position_at(&self, progress: f64) -> Pos2 {
        let [first, _, ..] = self.control_points.as_slice() else {
            return self.control_points.first().copied().unwrap_or_default();
        };

        let d = progress.clamp(0.0, 1.0) * self.dist();

        let idx = match self
            .cumulative_len
            .binary_search_by(|probe| probe.total_cmp(&d))
        {
            Ok(idx) => return self.control_points[idx],
            Err(0) => return *first,
            // Past the drawn length so we extend along the last segment
            Err(idx) if idx == self.control_points.len() => idx - 1,
            Err(idx) => idx,
        };

        let start = self.control_points[idx - 1];
        let end = self.control_points[idx];

        let segment_start = self.cumulative_len[idx - 1];
        let segment_len = self.cumulative_len[idx] - segment_start;

        if segment_len <= 0.0 {
            return start;
        }

        let t = (d - segment_start) / segment_len;

        start + (end - start) * t as f32
    }
}
