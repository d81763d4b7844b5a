//! One-line descriptions of loaded files, as printed by `motio-inspect`.

use motio_core::Bounds;
use motio_format::DataFile;
use motio_playback::{frame_time, PlaybackConfig};

fn fmt_bounds(bounds: Option<Bounds>) -> String {
    match bounds {
        Some(b) => format!(
            "x [{:.3}, {:.3}] y [{:.3}, {:.3}]",
            b.x_min, b.x_max, b.y_min, b.y_max
        ),
        None => "no extent".to_string(),
    }
}

/// Describe `file` on one line.
///
/// Simulations also report the playback length implied by `config`.
pub fn describe(file: &DataFile, config: &PlaybackConfig) -> String {
    match file {
        DataFile::Curve(c) => {
            let range = match c.t_range() {
                Some((lo, hi)) => format!(", t [{lo:.3}, {hi:.3}]"),
                None => String::new(),
            };
            format!(
                "{} '{}': {} samples{range}, {}",
                file.kind(),
                c.title,
                c.len(),
                fmt_bounds(c.bounds())
            )
        }
        DataFile::Simulation(s) => {
            let duration = frame_time(s.step_count().saturating_sub(1), config.frame_duration);
            format!(
                "{}: {} balls, {} steps ({duration:.1} time units), {}",
                file.kind(),
                s.ball_count(),
                s.step_count(),
                fmt_bounds(s.bounds())
            )
        }
        DataFile::VectorField(f) => {
            let magnitude = match (f.min_nonzero_magnitude(), f.max_magnitude()) {
                (Some(lo), Some(hi)) => format!(", |v| [{lo:.3}, {hi:.3}]"),
                (None, Some(hi)) => format!(", |v| max {hi:.3}"),
                _ => String::new(),
            };
            format!(
                "{} '{}': {} samples{magnitude}, {}",
                file.kind(),
                f.title,
                f.len(),
                fmt_bounds(f.bounds())
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motio_format::load_lines;
    use motio_format::LineSeq;

    fn load_text(text: &str) -> DataFile {
        load_lines(&LineSeq::from_text(text)).unwrap()
    }

    #[test]
    fn curve_summary() {
        let file = load_text("PARAMETRIC_CURVE_CARTESIAN_2D\nArc\na\nb\nc\n0 0 0\n2 1 -1\n");
        assert_eq!(
            describe(&file, &PlaybackConfig::default()),
            "PARAMETRIC_CURVE_CARTESIAN_2D 'Arc': 2 samples, t [0.000, 2.000], \
             x [0.000, 1.000] y [-1.000, 0.000]"
        );
    }

    #[test]
    fn simulation_summary_uses_frame_duration() {
        let file = load_text(motio_test_utils::SIM_ONE_BALL);
        let cfg = PlaybackConfig { frame_duration: 2.0 };
        let line = describe(&file, &cfg);
        assert!(line.starts_with("PARTICLE_SIMULATION_DATA_2D: 1 balls, 2 steps (2.0 time units)"));
    }

    #[test]
    fn empty_field_has_no_extent() {
        let file = load_text("VECTOR_FIELD_2D_CARTESIAN\nNothing\n");
        assert_eq!(
            describe(&file, &PlaybackConfig::default()),
            "VECTOR_FIELD_2D_CARTESIAN 'Nothing': 0 samples, no extent"
        );
    }
}
