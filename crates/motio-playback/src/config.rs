//! Playback configuration and validation.

use std::error::Error;
use std::fmt;

/// Simulated time units covered by one frame unless configured otherwise.
///
/// Fixed, not derived from the step times recorded in the file.
pub const DEFAULT_FRAME_DURATION: f64 = 0.1;

/// Configuration for projecting frames onto simulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackConfig {
    /// Simulated time per frame. Default: [`DEFAULT_FRAME_DURATION`].
    pub frame_duration: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

impl PlaybackConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frame_duration.is_finite() || self.frame_duration <= 0.0 {
            return Err(ConfigError::InvalidFrameDuration {
                value: self.frame_duration,
            });
        }
        Ok(())
    }
}

/// Errors detected by [`PlaybackConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `frame_duration` is NaN, infinite, zero, or negative.
    InvalidFrameDuration {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameDuration { value } => {
                write!(f, "frame_duration must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
