//! Format tags and tag-based dispatch.
//!
//! The `parse_*` functions ignore the tag line entirely. [`load`] is the
//! one place that reads it, to pick which parser to run.

use std::fmt;
use std::path::Path;

use motio_core::{CurveRecord, FieldRecord, FormatError, ParseError, SimulationRecord};

use crate::curve::parse_curve_lines;
use crate::field::parse_vector_field_lines;
use crate::lines::{parse_file, LineSeq};
use crate::simulation::parse_simulation_lines;

/// The three supported layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `PARAMETRIC_CURVE_CARTESIAN_2D`
    Curve,
    /// `PARTICLE_SIMULATION_DATA_2D`
    Simulation,
    /// `VECTOR_FIELD_2D_CARTESIAN`
    VectorField,
}

impl FormatKind {
    /// Every kind, in tag order.
    pub const ALL: [FormatKind; 3] = [Self::Curve, Self::Simulation, Self::VectorField];

    /// The tag line that opens a file of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Curve => "PARAMETRIC_CURVE_CARTESIAN_2D",
            Self::Simulation => "PARTICLE_SIMULATION_DATA_2D",
            Self::VectorField => "VECTOR_FIELD_2D_CARTESIAN",
        }
    }

    /// Match an already-trimmed tag line exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A record of whichever kind the file held.
#[derive(Clone, Debug, PartialEq)]
pub enum DataFile {
    /// A parametric curve.
    Curve(CurveRecord),
    /// A particle simulation.
    Simulation(SimulationRecord),
    /// A vector field.
    VectorField(FieldRecord),
}

impl DataFile {
    /// Which layout this record came from.
    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Curve(_) => FormatKind::Curve,
            Self::Simulation(_) => FormatKind::Simulation,
            Self::VectorField(_) => FormatKind::VectorField,
        }
    }
}

/// Identify the layout from the first line.
pub fn detect_format(lines: &LineSeq) -> Result<FormatKind, FormatError> {
    let first = lines.get(0).ok_or_else(|| FormatError::UnexpectedEnd {
        expected: "format tag line".into(),
    })?;
    FormatKind::from_tag(first.text()).ok_or_else(|| FormatError::UnknownFormat {
        tag: first.text().to_string(),
    })
}

/// Detect the layout and run the matching parser.
pub fn load_lines(lines: &LineSeq) -> Result<DataFile, FormatError> {
    Ok(match detect_format(lines)? {
        FormatKind::Curve => DataFile::Curve(parse_curve_lines(lines)?),
        FormatKind::Simulation => DataFile::Simulation(parse_simulation_lines(lines)?),
        FormatKind::VectorField => DataFile::VectorField(parse_vector_field_lines(lines)?),
    })
}

/// Read a file and parse it according to its tag line.
pub fn load(path: impl AsRef<Path>) -> Result<DataFile, ParseError> {
    parse_file(path.as_ref(), load_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in FormatKind::ALL {
            assert_eq!(FormatKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(FormatKind::from_tag("particle_simulation_data_2d"), None);
    }

    #[test]
    fn dispatch_picks_parser_from_tag() {
        let lines = LineSeq::from_text("VECTOR_FIELD_2D_CARTESIAN\nT\n0 0 1 1\n");
        let file = load_lines(&lines).unwrap();
        assert_eq!(file.kind(), FormatKind::VectorField);
    }

    #[test]
    fn unknown_and_missing_tags() {
        let lines = LineSeq::from_text("SCALAR_FUNCTION_2D\nT\n");
        assert_eq!(
            detect_format(&lines),
            Err(FormatError::UnknownFormat {
                tag: "SCALAR_FUNCTION_2D".into()
            })
        );
        assert!(matches!(
            detect_format(&LineSeq::default()),
            Err(FormatError::UnexpectedEnd { .. })
        ));
    }
}
