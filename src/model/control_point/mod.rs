pub use self::{difficulty::DifficultyPoint, effect::EffectPoint, timing::TimingPoint};

pub(crate) use self::{
    difficulty::difficulty_point_at, effect::effect_point_at, timing::timing_point_at,
};

mod difficulty;
mod effect;
mod timing;
