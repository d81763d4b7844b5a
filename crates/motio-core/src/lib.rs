//! Core record types for the Motio data formats.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the normalized, immutable records produced by the parsers in
//! `motio-format`: parametric curves, particle simulations, and 2D
//! vector fields, together with their bounds helpers and the error
//! taxonomy shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod color;
pub mod curve;
pub mod error;
pub mod field;
pub mod simulation;

pub use bounds::Bounds;
pub use color::Rgb;
pub use curve::{CurveRecord, CurveSample};
pub use error::{FormatError, ParseError};
pub use field::{FieldRecord, FieldSample};
pub use simulation::{Ball, Position, RowWidthMismatch, SimulationBuilder, SimulationRecord};
