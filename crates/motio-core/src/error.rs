//! Error types for loading Motio data files.
//!
//! Two layers: [`FormatError`] describes a structural violation found in
//! already-read text, and [`ParseError`] adds the file path and the I/O
//! failure case for the path-based entry points.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::simulation::RowWidthMismatch;

/// A structural violation in one of the line-oriented formats.
///
/// Line numbers are 1-based and refer to the original source text,
/// counting blank lines that the line reader dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The input ended before a required line was found.
    UnexpectedEnd {
        /// What the parser was looking for (e.g. `"title line"`).
        expected: String,
    },
    /// A line had too few tokens for a positional field the parser needs.
    MissingToken {
        /// Source line number.
        line: usize,
        /// Zero-based token index that was missing.
        index: usize,
        /// What the token should have held (e.g. `"radius"`).
        expected: &'static str,
    },
    /// A token that must be a floating-point number could not be parsed.
    InvalidNumber {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A token that must be a non-negative integer count could not be parsed.
    InvalidCount {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A block did not hold one row per declared entity.
    RowWidth {
        /// Rows required by the header.
        expected: usize,
        /// Rows supplied.
        found: usize,
    },
    /// The file content is not valid UTF-8.
    InvalidUtf8 {
        /// Source line holding the first invalid byte.
        line: usize,
    },
    /// The first line does not name a known format.
    UnknownFormat {
        /// The tag line as found in the file.
        tag: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input: expected {expected}")
            }
            Self::MissingToken {
                line,
                index,
                expected,
            } => {
                write!(f, "line {line}: missing token {index} ({expected})")
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a number")
            }
            Self::InvalidCount { line, token } => {
                write!(f, "line {line}: '{token}' is not a valid count")
            }
            Self::RowWidth { expected, found } => {
                write!(f, "block has {found} rows, header declares {expected}")
            }
            Self::InvalidUtf8 { line } => write!(f, "line {line}: invalid UTF-8"),
            Self::UnknownFormat { tag } => write!(f, "unknown format tag '{tag}'"),
        }
    }
}

impl Error for FormatError {}

impl From<RowWidthMismatch> for FormatError {
    fn from(e: RowWidthMismatch) -> Self {
        Self::RowWidth {
            expected: e.expected,
            found: e.found,
        }
    }
}

/// Errors from the path-based parse entry points.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be opened or read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file was read but its contents violate the format.
    Format {
        /// Path of the offending file.
        path: PathBuf,
        /// The structural violation.
        source: FormatError,
    },
}

impl ParseError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => path.as_path(),
        }
    }

    /// The structural violation, if this is a format error.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }

    /// Returns `true` for the I/O case.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Format { path, source } => {
                write!(f, "malformed '{}': {source}", path.display())
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
        }
    }
}
