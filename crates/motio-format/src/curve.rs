//! `PARAMETRIC_CURVE_CARTESIAN_2D` parser.
//!
//! Layout (after blank-line removal): tag, title, three reserved header
//! lines, then one `t x y` row per line. Rows with fewer than three tokens
//! are skipped; tokens past the third are ignored.

use std::path::Path;

use tracing::{debug, trace};

use motio_core::{CurveRecord, CurveSample, FormatError, ParseError};

use crate::lines::{parse_file, Line, LineSeq};
use crate::tokens::{parse_leading, tokenize};

/// Header lines between the title and the first data row.
pub const RESERVED_HEADER_LINES: usize = 3;

/// Where a [`CurveParser`] is in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveState {
    /// Expecting the format tag.
    Tag,
    /// Expecting the title.
    Title,
    /// Inside the reserved header.
    Reserved {
        /// Reserved lines still to skip.
        remaining: usize,
    },
    /// Reading data rows.
    Data,
}

/// Line-at-a-time curve parser.
#[derive(Debug)]
pub struct CurveParser {
    state: CurveState,
    title: String,
    samples: Vec<CurveSample>,
    skipped: usize,
}

impl CurveParser {
    /// A parser waiting for the tag line.
    pub fn new() -> Self {
        Self {
            state: CurveState::Tag,
            title: String::new(),
            samples: Vec::new(),
            skipped: 0,
        }
    }

    /// Current position in the layout.
    pub fn state(&self) -> CurveState {
        self.state
    }

    /// Data lines skipped for having fewer than three tokens.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consume one line.
    pub fn feed(&mut self, line: &Line) -> Result<(), FormatError> {
        self.state = match self.state {
            CurveState::Tag => CurveState::Title,
            CurveState::Title => {
                self.title = line.text().to_string();
                CurveState::Reserved {
                    remaining: RESERVED_HEADER_LINES,
                }
            }
            CurveState::Reserved { remaining } if remaining > 1 => CurveState::Reserved {
                remaining: remaining - 1,
            },
            CurveState::Reserved { .. } => CurveState::Data,
            CurveState::Data => {
                let tokens = tokenize(line);
                if tokens.len() < 3 {
                    trace!(line = line.number(), "skipping short curve row");
                    self.skipped += 1;
                } else {
                    let [t, x, y] = parse_leading::<3>(&tokens, line)?;
                    self.samples.push(CurveSample { t, x, y });
                }
                CurveState::Data
            }
        };
        Ok(())
    }

    /// Finish parsing. Fails if the header was incomplete.
    pub fn finish(self) -> Result<CurveRecord, FormatError> {
        let expected = match self.state {
            CurveState::Data => {
                return Ok(CurveRecord {
                    title: self.title,
                    samples: self.samples,
                })
            }
            CurveState::Tag => "format tag line".to_string(),
            CurveState::Title => "title line".to_string(),
            CurveState::Reserved { remaining } => {
                format!("{remaining} more reserved header line(s)")
            }
        };
        Err(FormatError::UnexpectedEnd { expected })
    }
}

impl Default for CurveParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a normalized line sequence as a curve.
pub fn parse_curve_lines(lines: &LineSeq) -> Result<CurveRecord, FormatError> {
    let mut parser = CurveParser::new();
    for line in lines {
        parser.feed(line)?;
    }
    let skipped = parser.skipped();
    let record = parser.finish()?;
    debug!(
        title = %record.title,
        samples = record.samples.len(),
        skipped,
        "parsed curve"
    );
    Ok(record)
}

/// Parse curve text held in memory.
pub fn parse_curve_str(text: &str) -> Result<CurveRecord, FormatError> {
    parse_curve_lines(&LineSeq::from_text(text))
}

/// Read and parse a curve file.
pub fn parse_curve(path: impl AsRef<Path>) -> Result<CurveRecord, ParseError> {
    parse_file(path.as_ref(), parse_curve_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_curve() {
        let rec = parse_curve_str("TAG\nTitle\nH\nH\nH\n0 0 0\n1 1 1\n").unwrap();
        assert_eq!(rec.title, "Title");
        assert_eq!(
            rec.samples,
            vec![CurveSample::new(0.0, 0.0, 0.0), CurveSample::new(1.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn short_rows_are_skipped_and_extras_ignored() {
        let text = "TAG\nT\nt1 0\nt2 1\nNumPoints 3\n0 1 2 99\n5 6\n1 3 4\n";
        let rec = parse_curve_str(text).unwrap();
        assert_eq!(
            rec.samples,
            vec![CurveSample::new(0.0, 1.0, 2.0), CurveSample::new(1.0, 3.0, 4.0)]
        );
    }

    #[test]
    fn state_walks_through_header() {
        let mut p = CurveParser::new();
        let states: Vec<_> = ["TAG", "T", "a", "b", "c", "0 0 0"]
            .iter()
            .enumerate()
            .map(|(i, text)| {
                p.feed(&Line::new(i + 1, *text)).unwrap();
                p.state()
            })
            .collect();
        assert_eq!(
            states,
            vec![
                CurveState::Title,
                CurveState::Reserved { remaining: 3 },
                CurveState::Reserved { remaining: 2 },
                CurveState::Reserved { remaining: 1 },
                CurveState::Data,
                CurveState::Data,
            ]
        );
    }

    #[test]
    fn header_only_file_has_no_samples() {
        let rec = parse_curve_str("TAG\nT\na\nb\nc\n").unwrap();
        assert!(rec.samples.is_empty());
    }

    #[test]
    fn truncated_header_is_format_error() {
        assert_eq!(
            parse_curve_str("TAG\n").unwrap_err(),
            FormatError::UnexpectedEnd {
                expected: "title line".into()
            }
        );
        assert!(matches!(
            parse_curve_str("TAG\nT\nH\n"),
            Err(FormatError::UnexpectedEnd { .. })
        ));
        assert!(parse_curve_str("").is_err());
    }

    #[test]
    fn non_numeric_token_fails() {
        let err = parse_curve_str("TAG\nT\na\nb\nc\n\n0 zero 0\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidNumber {
                line: 7,
                token: "zero".into()
            }
        );
    }

    #[test]
    fn classic_mac_line_endings() {
        let curve = parse_curve_str("TAG\rTitle\rH\rH\rH\r0 0 0\r1 1 1\r").unwrap();
        assert_eq!(curve.title, "Title");
        assert_eq!(
            curve.samples,
            vec![CurveSample::new(0.0, 0.0, 0.0), CurveSample::new(1.0, 1.0, 1.0)]
        );
    }
}
