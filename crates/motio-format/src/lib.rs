//! Parsers and writers for the Motio text formats.
//!
//! Three newline-delimited, whitespace-tokenized formats are supported.
//! Each starts with a tag line naming the format:
//!
//! ```text
//! PARAMETRIC_CURVE_CARTESIAN_2D      PARTICLE_SIMULATION_DATA_2D     VECTOR_FIELD_2D_CARTESIAN
//! <title>                            <label> <N>                     <title>
//! <reserved>                         <name> <color> <radius>   x N   <px> <py> <vx> <vy>   ...
//! <reserved>                         <label> <S>
//! <reserved>                         <step label>            \
//! <t> <x> <y>   ...                  <name> <x> <y>   x N    / x S
//! ```
//!
//! Blank lines are dropped and every line is trimmed before any positional
//! interpretation (see [`LineSeq`]). Each parser is an explicit state
//! machine fed one line at a time, so the positional contract of each
//! layout lives in a single `match`.
//!
//! # Entry points
//!
//! - [`parse_curve`], [`parse_simulation`], [`parse_vector_field`] read a
//!   file and return the matching record
//! - `*_str` variants parse in-memory text
//! - [`load`] picks the parser from the tag line, [`load_batch`] loads many
//!   files with per-file failure isolation
//! - [`writer`] emits each format, so records can be written back out

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod curve;
pub mod detect;
pub mod field;
pub mod lines;
pub mod simulation;
mod tokens;
pub mod writer;

pub use batch::{load_batch, parse_each, LoadOutcome, Outcome};
pub use curve::{parse_curve, parse_curve_lines, parse_curve_str, CurveParser, CurveState};
pub use detect::{detect_format, load, load_lines, DataFile, FormatKind};
pub use field::{
    parse_vector_field, parse_vector_field_lines, parse_vector_field_str, FieldParser, FieldState,
};
pub use lines::{read_lines, Line, LineSeq};
pub use simulation::{
    parse_simulation, parse_simulation_lines, parse_simulation_str, SimulationParser,
    SimulationState,
};
pub use writer::{write_curve, write_simulation, write_vector_field};

pub use motio_core::{FormatError, ParseError};
