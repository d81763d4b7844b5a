//! Particle simulation records.
//!
//! A [`SimulationRecord`] holds a fixed set of [`Ball`]s and one position
//! per ball per step. The per-ball traces always have the same length:
//! records can only be assembled through [`SimulationBuilder`], whose
//! [`push_step`](SimulationBuilder::push_step) extends every ball at once.

use std::error::Error;
use std::fmt;

use crate::bounds::Bounds;
use crate::color::Rgb;

/// A ball position at one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Position {
    /// Build a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A simulated point mass and its position trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    name: String,
    color: String,
    radius: f64,
    positions: Vec<Position>,
}

impl Ball {
    /// Name as declared in the header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color name, lowercased.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Resolved display color; unknown names fall back to black.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_name(&self.color).unwrap_or(Rgb::BLACK)
    }

    /// Radius as declared in the header.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Position trace, one entry per step.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position at `step`, or `None` past the end of the trace.
    pub fn position(&self, step: usize) -> Option<Position> {
        self.positions.get(step).copied()
    }
}

/// A parsed particle simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRecord {
    balls: Vec<Ball>,
    step_count: usize,
    step_times: Vec<Option<f64>>,
}

impl SimulationRecord {
    /// Balls in declaration order.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Number of declared balls.
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Number of steps. Every ball has exactly this many positions.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Time recorded on each step's label line, where one was present.
    pub fn step_times(&self) -> &[Option<f64>] {
        &self.step_times
    }

    /// Recorded time for `step`, if the label carried one.
    pub fn step_time(&self, step: usize) -> Option<f64> {
        self.step_times.get(step).copied().flatten()
    }

    /// First ball with the given name.
    pub fn ball(&self, name: &str) -> Option<&Ball> {
        self.balls.iter().find(|b| b.name == name)
    }

    /// Extent of every position, widened by each ball's radius.
    ///
    /// Returns `None` when there are no balls or no steps.
    pub fn bounds(&self) -> Option<Bounds> {
        self.balls
            .iter()
            .flat_map(|ball| {
                ball.positions.iter().map(move |p| Bounds {
                    x_min: p.x - ball.radius,
                    x_max: p.x + ball.radius,
                    y_min: p.y - ball.radius,
                    y_max: p.y + ball.radius,
                })
            })
            .reduce(|acc, b| acc.union(&b))
    }
}

/// A step row did not have one position per ball.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowWidthMismatch {
    /// Number of declared balls.
    pub expected: usize,
    /// Number of positions supplied.
    pub found: usize,
}

impl fmt::Display for RowWidthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step row has {} positions, expected one per ball ({})",
            self.found, self.expected
        )
    }
}

impl Error for RowWidthMismatch {}

/// Assembles a [`SimulationRecord`] step by step.
///
/// The ball set is fixed when the builder is created.
///
/// # Examples
///
/// ```
/// use motio_core::{Position, SimulationBuilder};
///
/// let mut builder = SimulationBuilder::new([("Ball", "Red", 5.0)]);
/// builder.push_step(None, &[Position::new(1.0, 2.0)]).unwrap();
/// builder.push_step(Some(0.1), &[Position::new(3.0, 4.0)]).unwrap();
/// let sim = builder.finish();
///
/// assert_eq!(sim.step_count(), 2);
/// assert_eq!(sim.balls()[0].color(), "red");
/// assert_eq!(sim.balls()[0].position(1), Some(Position::new(3.0, 4.0)));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationBuilder {
    balls: Vec<Ball>,
    step_times: Vec<Option<f64>>,
}

impl SimulationBuilder {
    /// Declare the ball set as `(name, color, radius)` triples.
    ///
    /// Colors are lowercased.
    pub fn new<N, C>(declarations: impl IntoIterator<Item = (N, C, f64)>) -> Self
    where
        N: Into<String>,
        C: AsRef<str>,
    {
        let balls = declarations
            .into_iter()
            .map(|(name, color, radius)| Ball {
                name: name.into(),
                color: color.as_ref().to_lowercase(),
                radius,
                positions: Vec::new(),
            })
            .collect();
        Self {
            balls,
            step_times: Vec::new(),
        }
    }

    /// Number of declared balls.
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Number of steps pushed so far.
    pub fn step_count(&self) -> usize {
        self.step_times.len()
    }

    /// Pre-allocate position storage for `steps` more steps.
    pub fn reserve_steps(&mut self, steps: usize) {
        self.step_times.reserve(steps);
        for ball in &mut self.balls {
            ball.positions.reserve(steps);
        }
    }

    /// Append one step. `row[i]` is the position of the i-th declared ball.
    ///
    /// Nothing is appended if the row width is wrong.
    pub fn push_step(
        &mut self,
        time: Option<f64>,
        row: &[Position],
    ) -> Result<(), RowWidthMismatch> {
        if row.len() != self.balls.len() {
            return Err(RowWidthMismatch {
                expected: self.balls.len(),
                found: row.len(),
            });
        }
        for (ball, &pos) in self.balls.iter_mut().zip(row) {
            ball.positions.push(pos);
        }
        self.step_times.push(time);
        Ok(())
    }

    /// Freeze the builder into an immutable record.
    pub fn finish(self) -> SimulationRecord {
        SimulationRecord {
            step_count: self.step_times.len(),
            balls: self.balls,
            step_times: self.step_times,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_balls() -> SimulationBuilder {
        SimulationBuilder::new([("A", "BLUE", 1.0), ("B", "mauve", 2.0)])
    }

    #[test]
    fn zero_steps_leaves_traces_empty() {
        let sim = two_balls().finish();
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.ball_count(), 2);
        assert!(sim.balls().iter().all(|b| b.positions().is_empty()));
        assert!(sim.bounds().is_none());
    }

    #[test]
    fn wrong_row_width_is_rejected_without_side_effects() {
        let mut b = two_balls();
        let err = b.push_step(None, &[Position::new(0.0, 0.0)]).unwrap_err();
        assert_eq!(err, RowWidthMismatch { expected: 2, found: 1 });
        assert_eq!(b.step_count(), 0);
        let sim = b.finish();
        assert!(sim.balls().iter().all(|b| b.positions().is_empty()));
    }

    #[test]
    fn colors_are_lowercased_and_resolved() {
        let sim = two_balls().finish();
        assert_eq!(sim.balls()[0].color(), "blue");
        assert_eq!(sim.balls()[0].rgb(), Rgb::new(0, 0, 255));
        assert_eq!(sim.balls()[1].rgb(), Rgb::BLACK);
    }

    #[test]
    fn bounds_include_radius() {
        let mut b = two_balls();
        b.push_step(None, &[Position::new(0.0, 0.0), Position::new(10.0, 10.0)])
            .unwrap();
        let bounds = b.finish().bounds().unwrap();
        assert_eq!(bounds.x_min, -1.0);
        assert_eq!(bounds.x_max, 12.0);
        assert_eq!(bounds.y_min, -1.0);
        assert_eq!(bounds.y_max, 12.0);
    }

    #[test]
    fn lookup_by_name_and_step_time() {
        let mut b = two_balls();
        b.push_step(Some(0.5), &[Position::new(1.0, 1.0), Position::new(2.0, 2.0)])
            .unwrap();
        b.push_step(None, &[Position::new(3.0, 3.0), Position::new(4.0, 4.0)])
            .unwrap();
        let sim = b.finish();
        assert_eq!(sim.ball("B").unwrap().position(1), Some(Position::new(4.0, 4.0)));
        assert!(sim.ball("C").is_none());
        assert_eq!(sim.step_time(0), Some(0.5));
        assert_eq!(sim.step_time(1), None);
        assert_eq!(sim.step_time(9), None);
    }

    proptest! {
        #[test]
        fn traces_stay_in_lockstep(n_balls in 0usize..6, steps in 0usize..20) {
            let decls: Vec<_> = (0..n_balls)
                .map(|i| (format!("b{i}"), "red", 1.0))
                .collect();
            let mut b = SimulationBuilder::new(decls);
            b.reserve_steps(steps);
            for s in 0..steps {
                let row: Vec<Position> = (0..n_balls)
                    .map(|i| Position::new(s as f64, i as f64))
                    .collect();
                b.push_step(None, &row).unwrap();
            }
            let sim = b.finish();
            prop_assert_eq!(sim.ball_count(), n_balls);
            prop_assert_eq!(sim.step_count(), steps);
            prop_assert_eq!(sim.step_times().len(), steps);
            for ball in sim.balls() {
                prop_assert_eq!(ball.positions().len(), steps);
            }
        }
    }
}
