//! Text encoders for the three formats.
//!
//! Output re-parses to an equal record for simulations, and to an equal
//! record for curves and fields as long as the title has no surrounding
//! whitespace. Floats use Rust's shortest round-trip formatting.
//!
//! Every token the parser splits on whitespace (ball names and colors)
//! must be a single non-empty word, and titles must be a single non-empty
//! line; otherwise the writer fails with [`io::ErrorKind::InvalidInput`]
//! before emitting anything.

use std::io::{self, Write};

use motio_core::{CurveRecord, FieldRecord, SimulationRecord};

use crate::detect::FormatKind;

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn check_word(what: &str, value: &str) -> io::Result<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid(format!("{what} '{value}' must be a single word")));
    }
    Ok(())
}

fn check_title(title: &str) -> io::Result<()> {
    if title.trim().is_empty() || title.contains(['\n', '\r']) {
        return Err(invalid(format!(
            "title {title:?} must be a single non-blank line"
        )));
    }
    Ok(())
}

/// Write a curve as `PARAMETRIC_CURVE_CARTESIAN_2D`.
///
/// The reserved header records the parameter range and point count.
pub fn write_curve(w: &mut dyn Write, curve: &CurveRecord) -> io::Result<()> {
    check_title(&curve.title)?;
    let (t1, t2) = match (curve.first(), curve.last()) {
        (Some(a), Some(b)) => (a.t, b.t),
        _ => (0.0, 0.0),
    };
    writeln!(w, "{}", FormatKind::Curve.tag())?;
    writeln!(w, "{}", curve.title)?;
    writeln!(w, "t1: {t1}")?;
    writeln!(w, "t2: {t2}")?;
    writeln!(w, "NumPoints: {}", curve.samples.len())?;
    for s in &curve.samples {
        writeln!(w, "{} {} {}", s.t, s.x, s.y)?;
    }
    Ok(())
}

/// Write a particle simulation as `PARTICLE_SIMULATION_DATA_2D`.
///
/// Each block label is `Step <n>`, followed by the recorded time when the
/// record has one for that step.
pub fn write_simulation(w: &mut dyn Write, sim: &SimulationRecord) -> io::Result<()> {
    for ball in sim.balls() {
        check_word("ball name", ball.name())?;
        check_word("ball color", ball.color())?;
    }

    writeln!(w, "{}", FormatKind::Simulation.tag())?;
    writeln!(w, "NumBalls: {}", sim.ball_count())?;
    for ball in sim.balls() {
        writeln!(w, "{} {} {}", ball.name(), ball.color(), ball.radius())?;
    }
    writeln!(w, "NumSteps: {}", sim.step_count())?;
    for step in 0..sim.step_count() {
        match sim.step_time(step) {
            Some(time) => writeln!(w, "Step {step} {time}")?,
            None => writeln!(w, "Step {step}")?,
        }
        for ball in sim.balls() {
            let p = ball.positions()[step];
            writeln!(w, "{} {} {}", ball.name(), p.x, p.y)?;
        }
    }
    Ok(())
}

/// Write a vector field as `VECTOR_FIELD_2D_CARTESIAN`.
pub fn write_vector_field(w: &mut dyn Write, field: &FieldRecord) -> io::Result<()> {
    check_title(&field.title)?;
    writeln!(w, "{}", FormatKind::VectorField.tag())?;
    writeln!(w, "{}", field.title)?;
    for s in &field.samples {
        writeln!(w, "{} {} {} {}", s.px, s.py, s.vx, s.vy)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::parse_curve_str;
    use crate::field::parse_vector_field_str;
    use crate::simulation::parse_simulation_str;
    use motio_core::{CurveSample, FieldSample, Position, SimulationBuilder};
    use proptest::prelude::*;

    fn to_text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn curve_round_trips() {
        let curve = CurveRecord {
            title: "Spiral of Archimedes".into(),
            samples: vec![
                CurveSample::new(0.0, 0.0, 0.0),
                CurveSample::new(0.5, 0.1, -0.25),
                CurveSample::new(0.25, 1e-9, 12345.678),
            ],
        };
        let text = to_text(|b| write_curve(b, &curve));
        assert!(text.starts_with("PARAMETRIC_CURVE_CARTESIAN_2D\nSpiral of Archimedes\n"));
        assert_eq!(parse_curve_str(&text).unwrap(), curve);
    }

    #[test]
    fn field_round_trips() {
        let field = FieldRecord {
            title: "Rotation".into(),
            samples: vec![FieldSample::new(-1.0, 0.0, 0.0, 1.0)],
        };
        let text = to_text(|b| write_vector_field(b, &field));
        assert_eq!(parse_vector_field_str(&text).unwrap(), field);
    }

    #[test]
    fn rejects_tokens_that_would_split() {
        let sim = SimulationBuilder::new([("two words", "red", 1.0)]).finish();
        let mut buf = Vec::new();
        let err = write_simulation(&mut buf, &sim).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());

        let blank = CurveRecord {
            title: "  ".into(),
            samples: vec![],
        };
        assert!(write_curve(&mut Vec::new(), &blank).is_err());
    }

    #[test]
    fn simulation_layout() {
        let mut b = SimulationBuilder::new([("Ball", "red", 5.0)]);
        b.push_step(None, &[Position::new(1.0, 2.0)]).unwrap();
        b.push_step(Some(0.1), &[Position::new(3.0, 4.0)]).unwrap();
        let text = to_text(|buf| write_simulation(buf, &b.finish()));
        assert_eq!(
            text,
            "PARTICLE_SIMULATION_DATA_2D\nNumBalls: 1\nBall red 5\nNumSteps: 2\n\
             Step 0\nBall 1 2\nStep 1 0.1\nBall 3 4\n"
        );
    }

    fn arb_simulation() -> impl Strategy<Value = SimulationRecord> {
        let ball = (
            "[A-Za-z][A-Za-z0-9_]{0,7}",
            prop::sample::select(vec!["red", "green", "blue", "orange", "teal"]),
            0.01f64..100.0,
        );
        (prop::collection::vec(ball, 0..5), 0usize..8).prop_flat_map(|(balls, steps)| {
            let n = balls.len();
            let rows = prop::collection::vec(
                (
                    prop::option::of(0.0f64..1e4),
                    prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), n),
                ),
                steps,
            );
            (Just(balls), rows)
        })
        .prop_map(|(balls, rows)| {
            let mut b = SimulationBuilder::new(balls);
            for (time, row) in rows {
                let row: Vec<Position> = row.into_iter().map(Position::from).collect();
                b.push_step(time, &row).unwrap();
            }
            b.finish()
        })
    }

    proptest! {
        #[test]
        fn simulation_round_trips(sim in arb_simulation()) {
            let text = to_text(|b| write_simulation(b, &sim));
            let back = parse_simulation_str(&text).unwrap();
            prop_assert_eq!(back, sim);
        }
    }
}
