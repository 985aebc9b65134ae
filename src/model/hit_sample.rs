/// A sound that is played when an object is hit.
///
/// Samples are carried through nested object generation untouched; they
/// don't influence difficulty or performance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitSample {
    /// Name of the sample e.g. `"hitnormal"`.
    pub name: String,
    /// Sample bank e.g. `"soft"`.
    pub bank: String,
    /// Volume between `0` and `100`.
    pub volume: u8,
}

impl HitSample {
    pub const HIT_NORMAL: &'static str = "hitnormal";
    pub const HIT_WHISTLE: &'static str = "hitwhistle";
    pub const HIT_FINISH: &'static str = "hitfinish";
    pub const HIT_CLAP: &'static str = "hitclap";
    pub const SLIDER_TICK: &'static str = "slidertick";

    /// Create a new sample with full volume.
    pub fn new(name: impl Into<String>, bank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: bank.into(),
            volume: 100,
        }
    }
}
