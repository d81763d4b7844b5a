//! Test fixtures and temp-file helpers for Motio development.
//!
//! Provides canned source texts for each format ([`fixtures`]), text
//! generators for sized inputs, and [`DataDir`], a temporary directory
//! that writes fixture files and cleans up on drop.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

pub use fixtures::*;

/// A scratch directory for file-based parser tests.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// A path inside the directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Curve text with the standard header followed by `samples`.
pub fn curve_text(title: &str, samples: &[(f64, f64, f64)]) -> String {
    let mut out = format!(
        "PARAMETRIC_CURVE_CARTESIAN_2D\n{title}\nt1: 0\nt2: 1\nNumPoints: {}\n",
        samples.len()
    );
    for (t, x, y) in samples {
        let _ = writeln!(out, "{t} {x} {y}");
    }
    out
}

/// Simulation text for `balls` (`name`, `color`, `radius`) where ball `i`
/// sits at `(step, i)` in every step.
pub fn simulation_text(balls: &[(&str, &str, f64)], steps: usize) -> String {
    let mut out = format!("PARTICLE_SIMULATION_DATA_2D\nNumBalls: {}\n", balls.len());
    for (name, color, radius) in balls {
        let _ = writeln!(out, "{name} {color} {radius}");
    }
    let _ = writeln!(out, "NumSteps: {steps}");
    for step in 0..steps {
        let _ = writeln!(out, "Step {step} {}", step as f64 * 0.1);
        for (i, (name, _, _)) in balls.iter().enumerate() {
            let _ = writeln!(out, "{name} {step} {i}");
        }
    }
    out
}

/// Vector field text for an `n × n` grid sampling the rotation `(-y, x)`.
pub fn rotation_field_text(n: usize) -> String {
    let mut out = String::from("VECTOR_FIELD_2D_CARTESIAN\nRotation\n");
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as f64, j as f64);
            let _ = writeln!(out, "{x} {y} {} {x}", -y);
        }
    }
    out
}
