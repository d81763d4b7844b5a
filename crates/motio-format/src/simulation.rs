//! `PARTICLE_SIMULATION_DATA_2D` parser.
//!
//! Layout (after blank-line removal):
//!
//! ```text
//! PARTICLE_SIMULATION_DATA_2D
//! <label> <N>
//! <name> <color> <radius>          N lines
//! <label> <S>
//! <step label>                     \
//! <name> <x> <y>                   | S blocks of 1 + N lines
//! ...                              /
//! ```
//!
//! Rows inside a block are matched to balls by offset only. The name token
//! on a position row is not compared with the declared ball at that
//! offset, so a file with reordered rows parses and assigns positions by
//! row order.

use std::mem;
use std::path::Path;

use tracing::debug;

use motio_core::{FormatError, ParseError, Position, SimulationBuilder, SimulationRecord};

use crate::lines::{parse_file, Line, LineSeq};
use crate::tokens::{parse_count, parse_f64, tokenize, token};

/// Upper bound on steps pre-allocated from the header count alone.
const MAX_PREALLOCATED_STEPS: usize = 4096;

/// Where a [`SimulationParser`] is in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Expecting the format tag.
    Tag,
    /// Expecting the `<label> <N>` line.
    BallCount,
    /// Reading ball declarations.
    Declarations {
        /// Declarations still expected.
        remaining: usize,
    },
    /// Expecting the `<label> <S>` line.
    StepCount,
    /// Expecting the label line that opens a block.
    StepLabel {
        /// Zero-based step the block belongs to.
        step: usize,
    },
    /// Reading position rows of a block.
    StepRows {
        /// Zero-based step.
        step: usize,
        /// Zero-based row (ball offset) expected next.
        row: usize,
    },
    /// Every declared step has been read.
    Done,
}

/// Line-at-a-time particle simulation parser.
#[derive(Debug)]
pub struct SimulationParser {
    state: SimulationState,
    declarations: Vec<(String, String, f64)>,
    ball_count: usize,
    step_count: usize,
    builder: SimulationBuilder,
    row: Vec<Position>,
    row_time: Option<f64>,
    trailing: usize,
}

impl SimulationParser {
    /// A parser waiting for the tag line.
    pub fn new() -> Self {
        Self {
            state: SimulationState::Tag,
            declarations: Vec::new(),
            ball_count: 0,
            step_count: 0,
            builder: SimulationBuilder::new(Vec::<(String, String, f64)>::new()),
            row: Vec::new(),
            row_time: None,
            trailing: 0,
        }
    }

    /// Current position in the layout.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Lines seen after the last block.
    pub fn trailing_lines(&self) -> usize {
        self.trailing
    }

    /// Consume one line.
    pub fn feed(&mut self, line: &Line) -> Result<(), FormatError> {
        self.state = match self.state {
            SimulationState::Tag => SimulationState::BallCount,
            SimulationState::BallCount => {
                let tokens = tokenize(line);
                let n = parse_count(token(&tokens, line, 1, "ball count")?, line)?;
                self.ball_count = n;
                if n == 0 {
                    SimulationState::StepCount
                } else {
                    SimulationState::Declarations { remaining: n }
                }
            }
            SimulationState::Declarations { remaining } => {
                let tokens = tokenize(line);
                let name = token(&tokens, line, 0, "ball name")?;
                let color = token(&tokens, line, 1, "ball color")?;
                let radius = parse_f64(token(&tokens, line, 2, "ball radius")?, line)?;
                self.declarations
                    .push((name.to_string(), color.to_string(), radius));
                if remaining > 1 {
                    SimulationState::Declarations {
                        remaining: remaining - 1,
                    }
                } else {
                    SimulationState::StepCount
                }
            }
            SimulationState::StepCount => {
                let tokens = tokenize(line);
                let s = parse_count(token(&tokens, line, 1, "step count")?, line)?;
                self.step_count = s;
                self.builder = SimulationBuilder::new(mem::take(&mut self.declarations));
                self.builder.reserve_steps(s.min(MAX_PREALLOCATED_STEPS));
                self.row.reserve(self.ball_count);
                if s == 0 {
                    SimulationState::Done
                } else {
                    SimulationState::StepLabel { step: 0 }
                }
            }
            SimulationState::StepLabel { step } => {
                // Only presence matters; a third token is kept as the step time
                // when it happens to be numeric.
                self.row_time = tokenize(line).get(2).and_then(|t| t.parse().ok());
                if self.ball_count == 0 {
                    self.complete_step(step)?
                } else {
                    SimulationState::StepRows { step, row: 0 }
                }
            }
            SimulationState::StepRows { step, row } => {
                let tokens = tokenize(line);
                let x = parse_f64(token(&tokens, line, 1, "x position")?, line)?;
                let y = parse_f64(token(&tokens, line, 2, "y position")?, line)?;
                self.row.push(Position { x, y });
                if row + 1 == self.ball_count {
                    self.complete_step(step)?
                } else {
                    SimulationState::StepRows { step, row: row + 1 }
                }
            }
            SimulationState::Done => {
                self.trailing += 1;
                SimulationState::Done
            }
        };
        Ok(())
    }

    fn complete_step(&mut self, step: usize) -> Result<SimulationState, FormatError> {
        self.builder.push_step(self.row_time.take(), &self.row)?;
        self.row.clear();
        Ok(if step + 1 == self.step_count {
            SimulationState::Done
        } else {
            SimulationState::StepLabel { step: step + 1 }
        })
    }

    /// Finish parsing. Fails unless every declared step was read.
    pub fn finish(self) -> Result<SimulationRecord, FormatError> {
        let expected = match self.state {
            SimulationState::Done => return Ok(self.builder.finish()),
            SimulationState::Tag => "format tag line".to_string(),
            SimulationState::BallCount => "ball count line".to_string(),
            SimulationState::Declarations { remaining } => {
                format!("{remaining} more ball declaration line(s)")
            }
            SimulationState::StepCount => "step count line".to_string(),
            SimulationState::StepLabel { step } => format!("label line of step {step}"),
            SimulationState::StepRows { step, row } => {
                format!("position row {row} of step {step}")
            }
        };
        Err(FormatError::UnexpectedEnd { expected })
    }
}

impl Default for SimulationParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a normalized line sequence as a particle simulation.
pub fn parse_simulation_lines(lines: &LineSeq) -> Result<SimulationRecord, FormatError> {
    let mut parser = SimulationParser::new();
    for line in lines {
        parser.feed(line)?;
    }
    let trailing = parser.trailing_lines();
    let record = parser.finish()?;
    debug!(
        balls = record.ball_count(),
        steps = record.step_count(),
        trailing,
        "parsed particle simulation"
    );
    Ok(record)
}

/// Parse simulation text held in memory.
pub fn parse_simulation_str(text: &str) -> Result<SimulationRecord, FormatError> {
    parse_simulation_lines(&LineSeq::from_text(text))
}

/// Read and parse a particle simulation file.
pub fn parse_simulation(path: impl AsRef<Path>) -> Result<SimulationRecord, ParseError> {
    parse_file(path.as_ref(), parse_simulation_lines)
}
