//! `VECTOR_FIELD_2D_CARTESIAN` parser.
//!
//! Layout: tag, title, then one `px py vx vy` row per line. Rows with fewer
//! than four tokens are skipped; tokens past the fourth are ignored.

use std::path::Path;

use tracing::{debug, trace};

use motio_core::{FieldRecord, FieldSample, FormatError, ParseError};

use crate::lines::{parse_file, Line, LineSeq};
use crate::tokens::{parse_leading, tokenize};

/// Where a [`FieldParser`] is in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// Expecting the format tag.
    Tag,
    /// Expecting the title.
    Title,
    /// Reading data rows.
    Data,
}

/// Line-at-a-time vector field parser.
#[derive(Debug)]
pub struct FieldParser {
    state: FieldState,
    title: String,
    samples: Vec<FieldSample>,
    skipped: usize,
}

impl FieldParser {
    /// A parser waiting for the tag line.
    pub fn new() -> Self {
        Self {
            state: FieldState::Tag,
            title: String::new(),
            samples: Vec::new(),
            skipped: 0,
        }
    }

    /// Current position in the layout.
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Data lines skipped for having fewer than four tokens.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consume one line.
    pub fn feed(&mut self, line: &Line) -> Result<(), FormatError> {
        match self.state {
            FieldState::Tag => self.state = FieldState::Title,
            FieldState::Title => {
                self.title = line.text().to_string();
                self.state = FieldState::Data;
            }
            FieldState::Data => {
                let tokens = tokenize(line);
                if tokens.len() < 4 {
                    trace!(line = line.number(), "skipping short vector row");
                    self.skipped += 1;
                    return Ok(());
                }
                let [px, py, vx, vy] = parse_leading::<4>(&tokens, line)?;
                self.samples.push(FieldSample { px, py, vx, vy });
            }
        }
        Ok(())
    }

    /// Finish parsing. Fails if the title line never arrived.
    pub fn finish(self) -> Result<FieldRecord, FormatError> {
        let expected = match self.state {
            FieldState::Data => {
                return Ok(FieldRecord {
                    title: self.title,
                    samples: self.samples,
                })
            }
            FieldState::Tag => "format tag line",
            FieldState::Title => "title line",
        };
        Err(FormatError::UnexpectedEnd {
            expected: expected.to_string(),
        })
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a normalized line sequence as a vector field.
pub fn parse_vector_field_lines(lines: &LineSeq) -> Result<FieldRecord, FormatError> {
    let mut parser = FieldParser::new();
    for line in lines {
        parser.feed(line)?;
    }
    let skipped = parser.skipped();
    let record = parser.finish()?;
    debug!(
        title = %record.title,
        vectors = record.samples.len(),
        skipped,
        "parsed vector field"
    );
    Ok(record)
}

/// Parse vector field text held in memory.
pub fn parse_vector_field_str(text: &str) -> Result<FieldRecord, FormatError> {
    parse_vector_field_lines(&LineSeq::from_text(text))
}

/// Read and parse a vector field file.
pub fn parse_vector_field(path: impl AsRef<Path>) -> Result<FieldRecord, ParseError> {
    parse_file(path.as_ref(), parse_vector_field_lines)
}
