//! Benchmark inputs for the Motio parsers.
//!
//! Every generator is deterministic in its seed, so runs are comparable:
//!
//! - [`random_curve`], [`random_simulation`], [`random_field`] build records
//! - [`curve_text`], [`simulation_text`], [`field_text`] serialize them with
//!   the format writers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use motio_core::{
    CurveRecord, CurveSample, FieldRecord, FieldSample, Position, SimulationBuilder,
    SimulationRecord,
};
use motio_format::{write_curve, write_simulation, write_vector_field};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const COLORS: [&str; 6] = ["red", "green", "blue", "orange", "purple", "cyan"];

/// A noisy spiral with `n` samples.
pub fn random_curve(n: usize, seed: u64) -> CurveRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let samples = (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64 * 10.0;
            let jitter = rng.random_range(-0.05..0.05);
            CurveSample::new(t, (t + jitter) * t.cos(), (t + jitter) * t.sin())
        })
        .collect();
    CurveRecord {
        title: format!("Spiral {seed}"),
        samples,
    }
}

/// `balls` random walkers over `steps` steps.
pub fn random_simulation(balls: usize, steps: usize, seed: u64) -> SimulationRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let declarations: Vec<(String, &str, f64)> = (0..balls)
        .map(|i| {
            let color = COLORS.choose(&mut rng).copied().unwrap_or(COLORS[0]);
            (format!("Ball_{i}"), color, rng.random_range(1.0..20.0))
        })
        .collect();
    let mut builder = SimulationBuilder::new(declarations);
    builder.reserve_steps(steps);

    let mut row: Vec<Position> = (0..balls)
        .map(|_| Position::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)))
        .collect();
    for step in 0..steps {
        for p in &mut row {
            p.x += rng.random_range(-2.0..2.0);
            p.y += rng.random_range(-2.0..2.0);
        }
        builder
            .push_step(Some(step as f64 * 0.1), &row)
            .unwrap_or_else(|_| unreachable!("row has one position per ball"));
    }
    builder.finish()
}

/// An `n × n` grid of random vectors.
pub fn random_field(n: usize, seed: u64) -> FieldRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let vx = rng.random_range(-1.0..1.0);
            let vy = rng.random_range(-1.0..1.0);
            samples.push(FieldSample::new(i as f64, j as f64, vx, vy));
        }
    }
    FieldRecord {
        title: format!("Random field {seed}"),
        samples,
    }
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    // Generated names and titles are single tokens; Vec writes never fail.
    if write(&mut buf).is_err() {
        unreachable!("generated record rejected by writer");
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// [`random_curve`] as file text.
pub fn curve_text(n: usize, seed: u64) -> String {
    let curve = random_curve(n, seed);
    render(|buf| write_curve(buf, &curve))
}

/// [`random_simulation`] as file text.
pub fn simulation_text(balls: usize, steps: usize, seed: u64) -> String {
    let sim = random_simulation(balls, steps, seed);
    render(|buf| write_simulation(buf, &sim))
}

/// [`random_field`] as file text.
pub fn field_text(n: usize, seed: u64) -> String {
    let field = random_field(n, seed);
    render(|buf| write_vector_field(buf, &field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use motio_format::{parse_curve_str, parse_simulation_str, parse_vector_field_str};

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(random_simulation(4, 10, 7), random_simulation(4, 10, 7));
        assert_ne!(random_simulation(4, 10, 7), random_simulation(4, 10, 8));
        assert_eq!(curve_text(50, 1), curve_text(50, 1));
    }

    #[test]
    fn generated_text_parses_back() {
        assert_eq!(parse_curve_str(&curve_text(100, 3)).unwrap(), random_curve(100, 3));
        assert_eq!(
            parse_simulation_str(&simulation_text(5, 20, 3)).unwrap(),
            random_simulation(5, 20, 3)
        );
        assert_eq!(parse_vector_field_str(&field_text(8, 3)).unwrap().len(), 64);
    }

    #[test]
    fn declarations_stay_in_range() {
        let sim = random_simulation(32, 1, 11);
        for ball in sim.balls() {
            assert!(COLORS.contains(&ball.color()), "{}", ball.color());
            assert!((1.0..20.0).contains(&ball.radius()));
        }
        let field = random_field(10, 11);
        assert!(field.max_magnitude().unwrap() < 2f64.sqrt());
    }
}
