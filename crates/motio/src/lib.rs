//! Motio: loaders for 2D scientific visualization data.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Motio sub-crates. It reads three text formats (parametric curves,
//! particle simulations, vector fields) into typed records and projects
//! simulations onto animation frames.
//!
//! # Quick start
//!
//! ```rust
//! use motio::prelude::*;
//!
//! let text = "PARTICLE_SIMULATION_DATA_2D\n\
//!             NumBalls: 1\n\
//!             Ball red 5\n\
//!             NumSteps: 2\n\
//!             Step 0 0.0\n\
//!             Ball 1 2\n\
//!             Step 1 0.1\n\
//!             Ball 3 4\n";
//! let sim = parse_simulation_str(text).unwrap();
//! assert_eq!(sim.step_count(), 2);
//!
//! let timeline = Timeline::new(&sim);
//! let last = timeline.frame(1).unwrap();
//! assert_eq!(last.balls[0].1, Position::new(3.0, 4.0));
//! assert_eq!(timeline.step_label(1).unwrap(), "Step: 1 / 1\nTime: 0.1");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `motio-core` | Records, bounds, colors, error types |
//! | [`format`] | `motio-format` | Parsers, tag dispatch, batch loading, writers |
//! | [`playback`] | `motio-playback` | Frame/time projection and cursors |
//! | [`summary`] | | One-line descriptions of loaded files |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod summary;

/// Records and error types (`motio-core`).
pub use motio_core as types;

/// Parsers and writers for the three text formats (`motio-format`).
///
/// [`format::load`] dispatches on the tag line; [`format::load_batch`]
/// isolates failures per file.
pub use motio_format as format;

/// Frame/time projection (`motio-playback`).
pub use motio_playback as playback;

/// Common imports for typical Motio usage.
///
/// ```rust
/// use motio::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use motio_core::{
        Ball, Bounds, CurveRecord, CurveSample, FieldRecord, FieldSample, Position, Rgb,
        SimulationRecord,
    };

    // Errors
    pub use motio_core::{FormatError, ParseError};

    // Parsing
    pub use motio_format::{
        load, load_batch, parse_curve, parse_curve_str, parse_simulation, parse_simulation_str,
        parse_vector_field, parse_vector_field_str, DataFile, FormatKind, LoadOutcome,
    };

    // Playback
    pub use motio_playback::{frame_time, FrameCursor, PlaybackConfig, Timeline};
}
