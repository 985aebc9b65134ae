//! Library to calculate difficulty and performance attributes for [osu!catch].
//!
//! ## Description
//!
//! `catch-pp` follows [osu!lazer]'s difficulty and performance calculation
//! for osu!catch. Juice streams and banana showers are expanded into their
//! catchable pickups, consecutive fruits and droplets are turned into
//! movement events, and a strain-based movement skill rates those events.
//!
//! Decoding `.osu` files is not part of this crate; a [`Beatmap`] is built by
//! the caller and may be verified through [`Beatmap::check_validity`].
//!
//! ## Usage
//!
//! ```
//! use catch_pp::{Beatmap, CatchDifficulty, CatchPerformance};
//! use catch_pp::object::{CatchHitObject, JuiceStream, SliderPath};
//! use catch_pp::model::pos::Pos2;
//!
//! let path = SliderPath::new(vec![Pos2::new(0.0, 0.0), Pos2::new(200.0, 0.0)], None);
//!
//! let mut map = Beatmap {
//!     hit_objects: vec![
//!         CatchHitObject::fruit(100.0, 500.0),
//!         CatchHitObject::juice_stream(50.0, 1000.0, JuiceStream::new(path, 1)),
//!         CatchHitObject::fruit(400.0, 3000.0),
//!         CatchHitObject::banana_shower(3500.0, 5000.0),
//!     ],
//!     ..Default::default()
//! };
//!
//! // Fill in velocities, tick distances, preempt times etc.
//! map.apply_defaults();
//!
//! // Calculate difficulty attributes
//! let diff_attrs = CatchDifficulty::new()
//!     .mods(8 + 16) // HDHR
//!     .calculate(&map);
//!
//! let stars = diff_attrs.stars;
//!
//! // Calculate performance attributes
//! let perf_attrs = CatchPerformance::new(diff_attrs)
//!     // The attributes must have been calculated for the same map and mods
//!     .mods(24) // HDHR, same as before
//!     .combo(3)
//!     .accuracy(99.2)
//!     .misses(1)
//!     .calculate();
//!
//! let pp = perf_attrs.pp();
//!
//! // Re-use the previous attributes for maximum efficiency.
//! let max_pp = perf_attrs.performance()
//!     .mods(24) // Still the same
//!     .calculate()
//!     .pp();
//!
//! println!("Stars: {stars} | PP: {pp}/{max_pp}");
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Calculation summaries are logged through `tracing::debug` and rejected beatmaps through `tracing::warn`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!catch]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21catch
//! [osu!lazer]: https://github.com/ppy/osu
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    difficulty::CatchDifficulty,
    model::{
        beatmap::{Beatmap, InvalidBeatmap},
        mods::GameMods,
    },
    performance::{CatchPerformance, CatchPerformanceCalculator},
    score_state::CatchScoreState,
    strains::CatchStrains,
};

pub use self::attributes::{CatchDifficultyAttributes, CatchPerformanceAttributes};

/// Types used in and around this crate.
pub mod model;

/// Catchable objects and the generation of nested pickups.
pub mod object;

/// Difficulty calculation.
pub mod difficulty;

/// Performance calculation.
pub mod performance;

/// Resulting attributes of calculations.
pub mod attributes;

/// Hitresults of a score.
pub mod score_state;

/// Strain values for plotting.
pub mod strains;

mod catcher;
mod util;
