//! Frame/time projection for animating particle simulations.
//!
//! A renderer walks frame indices `0..step_count`. This crate maps each
//! frame to a simulated time and to every ball's position, without
//! mutating the parsed [`SimulationRecord`](motio_core::SimulationRecord).
//!
//! - [`frame_time`] is the pure frame → time mapping
//! - [`Timeline`] answers per-frame queries against a record
//! - [`FrameCursor`] advances monotonically and supports seeking
//! - [`PlaybackConfig`] holds the per-frame duration (default `0.1`)
//!
//! Looping is a renderer policy: call [`FrameCursor::rewind`] when the
//! cursor runs out.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod timeline;

pub use config::{ConfigError, PlaybackConfig, DEFAULT_FRAME_DURATION};
pub use cursor::{FrameCursor, PlaybackError};
pub use timeline::{frame_time, FrameView, Frames, Timeline};
