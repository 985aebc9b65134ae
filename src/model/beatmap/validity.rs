use crate::object::CatchObjectKind;

use super::Beatmap;

/// Resulting error type of [`Beatmap::check_validity`].
///
/// Maps that fail the check violate assumptions of the difficulty and
/// performance calculation so their results are meaningless.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidBeatmap {
    #[error("hit object at index {idx} starts before its predecessor")]
    UnsortedObjects { idx: usize },
    #[error("hit object at index {idx} ends before it starts")]
    NegativeDuration { idx: usize },
    #[error("non-finite value in {field}")]
    NonFiniteValue { field: &'static str },
    #[error("slider velocity must be positive (hit object index {idx:?})")]
    InvalidSliderVelocity { idx: Option<usize> },
}

impl InvalidBeatmap {
    pub(crate) fn check(map: &Beatmap) -> Result<(), Self> {
        for (field, value) in [
            ("approach rate", f64::from(map.ar)),
            ("circle size", f64::from(map.cs)),
            ("slider multiplier", map.slider_multiplier),
            ("slider tick rate", map.slider_tick_rate),
        ] {
            if !value.is_finite() {
                return Err(Self::NonFiniteValue { field });
            }
        }

        if map.slider_multiplier <= 0.0 || map.slider_tick_rate <= 0.0 {
            return Err(Self::InvalidSliderVelocity { idx: None });
        }

        let mut prev_start = f64::NEG_INFINITY;

        for (idx, h) in map.hit_objects.iter().enumerate() {
            let start_time = h.start_time();

            if !start_time.is_finite() {
                return Err(Self::NonFiniteValue {
                    field: "hit object start time",
                });
            } else if !h.x().is_finite() {
                return Err(Self::NonFiniteValue {
                    field: "hit object position",
                });
            } else if start_time < prev_start {
                return Err(Self::UnsortedObjects { idx });
            }

            match h.kind {
                CatchObjectKind::JuiceStream(ref stream) => {
                    if !(stream.velocity > 0.0 && stream.velocity.is_finite()) {
                        return Err(Self::InvalidSliderVelocity { idx: Some(idx) });
                    } else if stream.distance() < 0.0 {
                        return Err(Self::NegativeDuration { idx });
                    }
                }
                CatchObjectKind::BananaShower(ref shower) => {
                    if !shower.end_time.is_finite() {
                        return Err(Self::NonFiniteValue {
                            field: "banana shower end time",
                        });
                    } else if shower.end_time < start_time {
                        return Err(Self::NegativeDuration { idx });
                    }
                }
                _ => {}
            }

            prev_start = start_time;
        }

        Ok(())
    }
}
