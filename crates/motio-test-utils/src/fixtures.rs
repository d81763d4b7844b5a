//! Canned source texts and the records they parse to.

use motio_core::{CurveRecord, CurveSample, Position, SimulationBuilder, SimulationRecord};

/// Smallest useful curve: two samples after a placeholder header.
pub const CURVE_MINIMAL: &str = "TAG\nTitle\nH\nH\nH\n0 0 0\n1 1 1\n";

pub fn curve_minimal_record() -> CurveRecord {
    CurveRecord {
        title: "Title".into(),
        samples: vec![
            CurveSample::new(0.0, 0.0, 0.0),
            CurveSample::new(1.0, 1.0, 1.0),
        ],
    }
}

/// Curve whose parameter runs backwards and which contains a short row
/// and blank lines.
pub const CURVE_UNSORTED: &str = "\
PARAMETRIC_CURVE_CARTESIAN_2D
Unsorted

t1: 0
t2: 3
NumPoints: 4
3 0 0
1 1 0

2 2
0 3 3 extra
2 2 2
";

/// One ball, two steps.
pub const SIM_ONE_BALL: &str = "\
PARTICLE_SIMULATION_DATA_2D
NumBalls: 1
Ball red 5
NumSteps: 2
Step 0 0.0
Ball 1 2
Step 1 0.1
Ball 3 4
";

pub fn sim_one_ball_record() -> SimulationRecord {
    let mut b = SimulationBuilder::new([("Ball", "red", 5.0)]);
    b.push_step(Some(0.0), &[Position::new(1.0, 2.0)])
        .expect("one position per ball");
    b.push_step(Some(0.1), &[Position::new(3.0, 4.0)])
        .expect("one position per ball");
    b.finish()
}

/// Three balls, the second block cut off after its first row.
pub const SIM_TRUNCATED: &str = "\
PARTICLE_SIMULATION_DATA_2D
NumBalls: 3
Ball_1 Red 10
Ball_2 Blue 20
Ball_3 Green 15
NumSteps: 2
Step 0 0.0
Ball_1 0 0
Ball_2 100 100
Ball_3 200 200
Step 1 0.1
Ball_1 1 1
";

/// Small vector field with a short row and trailing tokens.
pub const FIELD_SMALL: &str = "\
VECTOR_FIELD_2D_CARTESIAN
Small field
0 0 1 0
0 1 0 1 ignored
1 0
1 1 -1 -1
";
