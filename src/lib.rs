//! # sortscope
//!
//! Reproducible sorting-algorithm visualizer.
//!
//! Two pieces, decoupled:
//! - **Frame generation**: instrumented sorts record a snapshot of the array
//!   plus the highlighted index pair after every interesting step.
//! - **Frame playback**: frames are handed to a sink in order, with a fixed
//!   pause between them, and the sink is told when the run finished.
//!
//! ## Example
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let mut rng = SortRng::new(42);
//! let frames = sortscope::algorithms::generate(Algorithm::Quick, &[3, 1, 2], &mut rng);
//! assert_eq!(frames.final_state(), &[1, 2, 3]);
//! assert_eq!(frames.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop, // index pairs are the point of the frames
)]

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod describe;
pub mod engine;
pub mod error;
pub mod frames;
pub mod logging;
pub mod player;
pub mod render;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algorithms::{Algorithm, FrameGenerator};
    pub use crate::config::{VisConfig, VisConfigBuilder};
    pub use crate::describe::description;
    pub use crate::engine::rng::SortRng;
    pub use crate::error::{SortError, SortResult};
    pub use crate::frames::{Completion, Element, Frame, FrameSequence, Highlight};
    pub use crate::player::{CancelToken, FnSink, FramePlayer, FrameSink, Playback, PlaybackOutcome};
    pub use crate::session::{SortRun, Visualizer};
}

/// Re-export for public API
pub use error::{SortError, SortResult};
