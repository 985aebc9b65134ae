/// Beatmap related types.
pub mod beatmap;

/// Control point related types.
pub mod control_point;

/// Hit sample related types.
pub mod hit_sample;

/// Gamemods related types.
pub mod mods;

/// Position related types.
pub mod pos;
