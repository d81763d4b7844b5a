//! Monotonic frame cursor for animation loops.
//!
//! The cursor only tracks an index; it reads the record through a
//! [`Timeline`] and never modifies it.

use std::error::Error;
use std::fmt;

use crate::timeline::{FrameView, Timeline};

/// Errors from cursor operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// Seek target is not a valid frame.
    FrameOutOfRange {
        /// Requested frame.
        frame: usize,
        /// Number of frames available.
        frame_count: usize,
    },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameOutOfRange { frame, frame_count } => {
                write!(f, "frame {frame} out of range (0..{frame_count})")
            }
        }
    }
}

impl Error for PlaybackError {}

/// Walks frames `0, 1, …, frame_count - 1` and then stops.
///
/// # Examples
///
/// ```
/// use motio_core::{Position, SimulationBuilder};
/// use motio_playback::{FrameCursor, Timeline};
///
/// let mut b = SimulationBuilder::new([("Ball", "red", 5.0)]);
/// b.push_step(None, &[Position::new(1.0, 2.0)]).unwrap();
/// b.push_step(None, &[Position::new(3.0, 4.0)]).unwrap();
/// let sim = b.finish();
///
/// let mut cursor = FrameCursor::new(Timeline::new(&sim));
/// assert_eq!(cursor.advance().unwrap().index, 0);
/// assert_eq!(cursor.advance().unwrap().index, 1);
/// assert!(cursor.advance().is_none());
///
/// cursor.rewind();
/// assert_eq!(cursor.advance().unwrap().time, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FrameCursor<'a> {
    timeline: Timeline<'a>,
    next: usize,
}

impl<'a> FrameCursor<'a> {
    /// A cursor positioned before frame 0.
    pub fn new(timeline: Timeline<'a>) -> Self {
        Self { timeline, next: 0 }
    }

    /// The timeline being walked.
    pub fn timeline(&self) -> &Timeline<'a> {
        &self.timeline
    }

    /// Frame the next [`advance`](Self::advance) will return.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Returns `true` once every frame has been returned.
    pub fn is_finished(&self) -> bool {
        self.next >= self.timeline.frame_count()
    }

    /// Return the next frame, or `None` at the end.
    pub fn advance(&mut self) -> Option<FrameView<'a>> {
        let view = self.timeline.frame(self.next)?;
        self.next += 1;
        Some(view)
    }

    /// Position the cursor so the next [`advance`](Self::advance) returns `frame`.
    pub fn seek(&mut self, frame: usize) -> Result<(), PlaybackError> {
        let frame_count = self.timeline.frame_count();
        if frame >= frame_count {
            return Err(PlaybackError::FrameOutOfRange { frame, frame_count });
        }
        self.next = frame;
        Ok(())
    }

    /// Go back to frame 0.
    pub fn rewind(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motio_core::{Position, SimulationBuilder, SimulationRecord};

    fn record(steps: usize) -> SimulationRecord {
        let mut b = SimulationBuilder::new([("A", "red", 1.0)]);
        for s in 0..steps {
            b.push_step(None, &[Position::new(s as f64, s as f64)]).unwrap();
        }
        b.finish()
    }

    #[test]
    fn advances_to_end_then_stops() {
        let rec = record(3);
        let mut c = FrameCursor::new(Timeline::new(&rec));
        let seen: Vec<usize> = std::iter::from_fn(|| c.advance().map(|f| f.index)).collect();
        assert_eq!(seen, [0, 1, 2]);
        assert!(c.is_finished());
        assert!(c.advance().is_none());
    }

    #[test]
    fn seek_is_bounded() {
        let rec = record(5);
        let mut c = FrameCursor::new(Timeline::new(&rec));
        c.seek(4).unwrap();
        assert_eq!(c.advance().unwrap().balls[0].1, Position::new(4.0, 4.0));
        assert_eq!(
            c.seek(5),
            Err(PlaybackError::FrameOutOfRange {
                frame: 5,
                frame_count: 5
            })
        );
        assert_eq!(c.position(), 5);
        c.seek(1).unwrap();
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn empty_record_is_finished_immediately() {
        let rec = record(0);
        let mut c = FrameCursor::new(Timeline::new(&rec));
        assert!(c.is_finished());
        assert!(c.advance().is_none());
        assert!(c.seek(0).is_err());
    }
}
