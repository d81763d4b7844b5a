//! Per-frame queries against a parsed simulation.

use motio_core::{Ball, Position, SimulationRecord};

use crate::config::{ConfigError, PlaybackConfig};

/// Simulated time shown at `frame`: `frame × frame_duration`.
pub fn frame_time(frame: usize, frame_duration: f64) -> f64 {
    frame as f64 * frame_duration
}

/// Every ball's state at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView<'a> {
    /// Frame index.
    pub index: usize,
    /// Simulated time at this frame.
    pub time: f64,
    /// `(ball, position)` in declaration order.
    pub balls: Vec<(&'a Ball, Position)>,
}

/// Read-only projection of a [`SimulationRecord`] onto frames.
///
/// Frames map one-to-one onto steps, so `frame_count() == step_count()`.
/// Any frame can be addressed directly.
#[derive(Clone, Debug)]
pub struct Timeline<'a> {
    record: &'a SimulationRecord,
    frame_duration: f64,
}

impl<'a> Timeline<'a> {
    /// A timeline using [`PlaybackConfig::default`].
    pub fn new(record: &'a SimulationRecord) -> Self {
        Self {
            record,
            frame_duration: PlaybackConfig::default().frame_duration,
        }
    }

    /// A timeline with a validated configuration.
    pub fn with_config(
        record: &'a SimulationRecord,
        config: &PlaybackConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            record,
            frame_duration: config.frame_duration,
        })
    }

    /// The underlying record.
    pub fn record(&self) -> &'a SimulationRecord {
        self.record
    }

    /// Simulated time per frame.
    pub fn frame_duration(&self) -> f64 {
        self.frame_duration
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.record.step_count()
    }

    /// Index of the last frame, or `None` for an empty simulation.
    pub fn last_frame(&self) -> Option<usize> {
        self.frame_count().checked_sub(1)
    }

    /// Simulated time at `frame`, or `None` past the last frame.
    pub fn time_at(&self, frame: usize) -> Option<f64> {
        (frame < self.frame_count()).then(|| frame_time(frame, self.frame_duration))
    }

    /// Position of the ball at `ball_index` in frame `frame`.
    pub fn position_at(&self, ball_index: usize, frame: usize) -> Option<Position> {
        self.record.balls().get(ball_index)?.position(frame)
    }

    /// Position of `ball` in frame `frame`.
    ///
    /// `None` unless `ball` is one of this record's balls; an equal ball
    /// from another record does not count.
    pub fn position_of(&self, ball: &Ball, frame: usize) -> Option<Position> {
        if !self.record.balls().iter().any(|b| std::ptr::eq(b, ball)) {
            return None;
        }
        ball.position(frame)
    }

    /// Every ball's position at `frame`.
    pub fn frame(&self, frame: usize) -> Option<FrameView<'a>> {
        let time = self.time_at(frame)?;
        let balls = self
            .record
            .balls()
            .iter()
            .filter_map(|b| b.position(frame).map(|p| (b, p)))
            .collect();
        Some(FrameView {
            index: frame,
            time,
            balls,
        })
    }

    /// Iterate over every frame in order.
    pub fn frames(&self) -> Frames<'a> {
        Frames {
            timeline: self.clone(),
            next: 0,
        }
    }

    /// Overlay text a renderer shows for `frame`: step counter and time.
    pub fn step_label(&self, frame: usize) -> Option<String> {
        let time = self.time_at(frame)?;
        let last = self.last_frame().unwrap_or(0);
        Some(format!("Step: {frame} / {last}\nTime: {time:.1}"))
    }
}

/// Iterator over a timeline's frames.
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    timeline: Timeline<'a>,
    next: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = FrameView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.timeline.frame(self.next)?;
        self.next += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.timeline.frame_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use motio_core::SimulationBuilder;
    use proptest::prelude::*;

    fn record(steps: usize) -> SimulationRecord {
        let mut b = SimulationBuilder::new([("A", "red", 1.0), ("B", "blue", 2.0)]);
        for s in 0..steps {
            let s = s as f64;
            b.push_step(None, &[Position::new(s, 0.0), Position::new(0.0, -s)])
                .unwrap();
        }
        b.finish()
    }

    #[test]
    fn time_is_frame_times_duration() {
        let rec = record(3);
        let tl = Timeline::new(&rec);
        assert_eq!(tl.time_at(0), Some(0.0));
        assert_eq!(tl.time_at(2), Some(frame_time(2, 0.1)));
        assert_eq!(tl.time_at(3), None);
    }

    #[test]
    fn positions_come_from_trace() {
        let rec = record(3);
        let tl = Timeline::new(&rec);
        assert_eq!(tl.position_at(0, 2), Some(Position::new(2.0, 0.0)));
        assert_eq!(tl.position_at(1, 1), Some(Position::new(0.0, -1.0)));
        assert_eq!(tl.position_at(2, 0), None);
        assert_eq!(tl.position_at(0, 3), None);
        assert_eq!(tl.position_of(&rec.balls()[1], 2), Some(Position::new(0.0, -2.0)));
    }

    #[test]
    fn position_of_rejects_foreign_ball() {
        let rec = record(3);
        let other = record(3);
        let tl = Timeline::new(&rec);
        assert_eq!(other.balls()[0], rec.balls()[0]);
        assert_eq!(tl.position_of(&other.balls()[0], 1), None);
        assert_eq!(tl.position_of(&rec.balls()[0], 1), Some(Position::new(1.0, 0.0)));
    }

    #[test]
    fn frame_view_lists_every_ball() {
        let rec = record(2);
        let tl = Timeline::new(&rec);
        let view = tl.frame(1).unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.balls.len(), 2);
        assert_eq!(view.balls[0].0.name(), "A");
        assert_eq!(view.balls[1].1, Position::new(0.0, -1.0));
    }

    #[test]
    fn empty_simulation_has_no_frames() {
        let rec = record(0);
        let tl = Timeline::new(&rec);
        assert_eq!(tl.frame_count(), 0);
        assert_eq!(tl.last_frame(), None);
        assert!(tl.frame(0).is_none());
        assert_eq!(tl.frames().count(), 0);
    }

    #[test]
    fn step_label_matches_overlay() {
        let rec = record(11);
        let tl = Timeline::new(&rec);
        assert_eq!(tl.step_label(5).unwrap(), "Step: 5 / 10\nTime: 0.5");
        assert!(tl.step_label(11).is_none());
    }

    #[test]
    fn custom_duration_is_validated() {
        let rec = record(4);
        let cfg = PlaybackConfig { frame_duration: 0.5 };
        let tl = Timeline::with_config(&rec, &cfg).unwrap();
        assert_eq!(tl.time_at(3), Some(1.5));
        let bad = PlaybackConfig { frame_duration: 0.0 };
        assert!(Timeline::with_config(&rec, &bad).is_err());
    }

    proptest! {
        #[test]
        fn frames_visit_each_step_once(steps in 0usize..40) {
            let rec = record(steps);
            let tl = Timeline::new(&rec);
            let frames = tl.frames();
            prop_assert_eq!(frames.len(), steps);
            let indices: Vec<usize> = frames.map(|f| f.index).collect();
            prop_assert_eq!(indices, (0..steps).collect::<Vec<_>>());
        }

        #[test]
        fn time_is_monotonic(steps in 1usize..100, duration in 0.001f64..10.0) {
            let rec = record(steps);
            let tl = Timeline::with_config(&rec, &PlaybackConfig { frame_duration: duration }).unwrap();
            for f in 1..steps {
                prop_assert!(tl.time_at(f).unwrap() > tl.time_at(f - 1).unwrap());
            }
        }
    }
}
