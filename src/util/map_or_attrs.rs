use crate::{
    attributes::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    model::beatmap::Beatmap,
};

/// Either a map that still needs to be evaluated or attributes that were
/// already calculated.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOrAttrs<'map> {
    Map(&'map Beatmap),
    Attrs(CatchDifficultyAttributes),
}

impl<'map> From<&'map Beatmap> for MapOrAttrs<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::Map(map)
    }
}

impl From<CatchDifficultyAttributes> for MapOrAttrs<'_> {
    fn from(attrs: CatchDifficultyAttributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<CatchPerformanceAttributes> for MapOrAttrs<'_> {
    fn from(attrs: CatchPerformanceAttributes) -> Self {
        Self::Attrs(attrs.difficulty)
    }
}
