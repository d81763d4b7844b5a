//! Line reader shared by every format.
//!
//! Reads a whole file, trims each line, and drops the empty ones. The
//! result is the only input the parsers see; they never touch the
//! filesystem themselves.

use std::fs;
use std::path::Path;

use motio_core::{FormatError, ParseError};

/// A trimmed, non-empty source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    /// Build a line directly. `number` is 1-based.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// 1-based line number in the original text, blank lines included.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Trimmed content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered sequence of the non-blank lines of a source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSeq {
    lines: Vec<Line>,
}

impl LineSeq {
    /// Normalize in-memory text: trim every line and drop empty ones.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(text: &str) -> Self {
        let lines = split_lines(text)
            .enumerate()
            .filter_map(|(i, raw)| {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| Line::new(i + 1, trimmed))
            })
            .collect();
        Self { lines }
    }

    /// Number of non-blank lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the source had no non-blank lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index` (0-based, counting only non-blank lines).
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineSeq {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|seg| {
        let seg = seg.strip_suffix('\r').unwrap_or(seg);
        seg.split('\r')
    })
}

/// Read `path` and normalize its lines.
///
/// The file handle is closed before this returns, on success or error.
/// Content that is not UTF-8 is a [`FormatError::InvalidUtf8`], not an
/// I/O failure.
pub fn read_lines(path: impl AsRef<Path>) -> Result<LineSeq, ParseError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = split_lines(&String::from_utf8_lossy(valid)).count();
        ParseError::Format {
            path: path.to_path_buf(),
            source: FormatError::InvalidUtf8 { line },
        }
    })?;
    Ok(LineSeq::from_text(&text))
}

/// Read `path` and run `parse` over its lines, attaching the path to any
/// format error.
pub(crate) fn parse_file<T>(
    path: &Path,
    parse: impl FnOnce(&LineSeq) -> Result<T, FormatError>,
) -> Result<T, ParseError> {
    let lines = read_lines(path)?;
    parse(&lines).map_err(|source| ParseError::Format {
        path: path.to_path_buf(),
        source,
    })
}
