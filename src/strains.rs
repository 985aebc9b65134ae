use crate::difficulty::skills::{Movement, StrainSkill};

/// The result of calculating the strains on an osu!catch map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatchStrains {
    /// Strain peaks of the movement skill.
    pub movement: Vec<f64>,
}

impl CatchStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = <Movement as StrainSkill>::SECTION_LEN;
}
