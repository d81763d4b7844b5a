//! Loading many files with per-file failure isolation.
//!
//! A failure in one input is recorded in that input's [`Outcome`] and
//! never stops the remaining inputs from loading.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use motio_core::ParseError;

use crate::detect::{load, DataFile};

/// Result of loading one input.
#[derive(Debug)]
pub struct Outcome<T> {
    /// The input path.
    pub path: PathBuf,
    /// The parsed record or the reason it could not be produced.
    pub result: Result<T, ParseError>,
}

impl<T> Outcome<T> {
    /// Returns `true` if the input parsed.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of a tag-dispatched load.
pub type LoadOutcome = Outcome<DataFile>;

/// Run `parse` over every path independently, in order.
pub fn parse_each<T, I, P, F>(paths: I, mut parse: F) -> Vec<Outcome<T>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<T, ParseError>,
{
    paths
        .into_iter()
        .map(|p| {
            let path = p.as_ref();
            let result = parse(path);
            match &result {
                Ok(_) => debug!(path = %path.display(), "loaded"),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to load; continuing"),
            }
            Outcome {
                path: path.to_path_buf(),
                result,
            }
        })
        .collect()
}

/// Load every path with [`load`], isolating failures per file.
pub fn load_batch<I, P>(paths: I) -> Vec<LoadOutcome>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    parse_each(paths, |p| load(p))
}
