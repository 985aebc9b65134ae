use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::GameModsLegacy;

/// Collection of game mods.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
///
/// # Example
///
/// ```
/// use catch_pp::GameMods;
/// use rosu_mods::GameModsLegacy;
///
/// let int = GameMods::from(64 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::DoubleTime);
///
/// assert_eq!(int, legacy);
/// assert!(int.has(GameModsLegacy::Hidden));
/// ```
#[derive(Copy, Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsLegacy,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.inner, f)
    }
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsLegacy::NoMod,
    };

    /// Mods that change a map's difficulty attributes for osu!catch.
    const DIFFICULTY_RATE: [GameModsLegacy; 3] = [
        GameModsLegacy::NoMod,
        GameModsLegacy::DoubleTime,
        GameModsLegacy::HalfTime,
    ];

    const DIFFICULTY_SIZE: [GameModsLegacy; 3] = [
        GameModsLegacy::NoMod,
        GameModsLegacy::HardRock,
        GameModsLegacy::Easy,
    ];

    /// Check whether the given mod flags are all enabled.
    pub fn has(&self, flag: GameModsLegacy) -> bool {
        self.inner.contains(flag)
    }

    /// The underlying [`GameModsLegacy`].
    pub const fn legacy(&self) -> GameModsLegacy {
        self.inner
    }

    /// Returns the mods' clock rate.
    pub fn clock_rate(&self) -> f64 {
        self.inner.clock_rate()
    }

    /// All combinations of mods that alter the difficulty of an osu!catch
    /// map, including no mods at all.
    pub fn difficulty_mod_combinations() -> Vec<Self> {
        let mut combinations = Vec::with_capacity(9);

        for rate in Self::DIFFICULTY_RATE {
            for size in Self::DIFFICULTY_SIZE {
                combinations.push(Self::from(rate | size));
            }
        }

        combinations
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(&self) -> bool {
                    self.has(GameModsLegacy::$name)
                }
            )*
        }
    };
}

impl_has_mod! {
    nf: NoFail ["NoFail"],
    ez: Easy ["Easy"],
    hd: Hidden ["Hidden"],
    hr: HardRock ["HardRock"],
    dt: DoubleTime ["DoubleTime"],
    ht: HalfTime ["HalfTime"],
    fl: Flashlight ["Flashlight"],
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self { inner: mods }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits() {
        let mods = GameMods::from(8 + 16 + 1024);

        assert!(mods.hd());
        assert!(mods.hr());
        assert!(mods.fl());
        assert!(!mods.dt());
        assert!(!mods.nf());
    }

    #[test]
    fn clock_rate() {
        assert!((GameMods::from(64).clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((GameMods::from(256).clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!((GameMods::default().clock_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn combinations() {
        let combinations = GameMods::difficulty_mod_combinations();

        assert_eq!(combinations.len(), 9);
        assert_eq!(combinations[0], GameMods::default());
        assert!(combinations.iter().all(|mods| !(mods.dt() && mods.ht())));
        assert!(combinations.iter().all(|mods| !(mods.hr() && mods.ez())));
    }
}
