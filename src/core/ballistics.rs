use crate::core::error::LaunchError;

/// Downward acceleration; y grows upward so gravity is negative.
pub const EARTH_GRAVITY_MPS2: f64 = -9.8;

/// Initial velocity in one of its two equivalent parameterizations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LaunchInput {
    Polar { speed_mps: f64, angle_deg: f64 },
    Component { vx_mps: f64, vy_mps: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl LaunchInput {
    pub fn velocity(self) -> Velocity {
        match self {
            Self::Polar {
                speed_mps,
                angle_deg,
            } => velocity_components(speed_mps, angle_deg),
            Self::Component { vx_mps, vy_mps } => Velocity {
                vx: vx_mps,
                vy: vy_mps,
            },
        }
    }
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> Velocity {
    let theta = angle_deg.to_radians();
    Velocity {
        vx: speed_mps * theta.cos(),
        vy: speed_mps * theta.sin(),
    }
}

/// Inverse of [`velocity_components`]: `(speed_mps, angle_deg)`.
pub fn polar_from_components(vx: f64, vy: f64) -> (f64, f64) {
    (vx.hypot(vy), vy.atan2(vx).to_degrees())
}

/// One throw. Velocity is fixed at creation and never changes during flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub velocity: Velocity,
    pub initial_height_m: f64,
    pub gravity_mps2: f64,
}

/// Closed-form results of a launch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub vx: f64,
    pub vy: f64,
    pub max_height_m: f64,
    pub flight_time_s: f64,
    pub range_m: f64,
}

impl Solution {
    /// Lines shown on the results surface.
    pub fn result_lines(&self) -> Vec<String> {
        vec![
            format!("Max Height: {:.2} m", self.max_height_m),
            format!("Range: {:.2} m", self.range_m),
        ]
    }
}

impl Launch {
    pub fn new(input: LaunchInput, initial_height_m: f64, gravity_mps2: f64) -> Self {
        Self {
            velocity: input.velocity(),
            initial_height_m,
            gravity_mps2,
        }
    }

    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let Velocity { vx, vy } = self.velocity;
        let x = vx * time_s;
        let y = self.initial_height_m
            + (vy * time_s)
            + (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }

    /// Vertex of the vertical parabola. Holds for `vy <= 0` too, where the vertex
    /// lies before launch.
    pub fn max_height(&self) -> f64 {
        let vy = self.velocity.vy;
        self.initial_height_m + (vy * vy) / (2.0 * self.gravity_mps2.abs())
    }

    /// Both roots of `0 = y0 + vy*t + g*t^2/2`.
    pub fn landing_roots(&self) -> Result<(f64, f64), LaunchError> {
        let vy = self.velocity.vy;
        let g = self.gravity_mps2;
        let disc = vy * vy - 2.0 * g * self.initial_height_m;
        if disc < 0.0 {
            return Err(LaunchError::NoRealRoot { discriminant: disc });
        }

        let root = disc.sqrt();
        Ok(((-vy + root) / g, (-vy - root) / g))
    }

    pub fn flight_time(&self) -> Result<f64, LaunchError> {
        let (t1, t2) = self.landing_roots()?;
        Ok(t1.max(t2))
    }

    pub fn solve(&self) -> Result<Solution, LaunchError> {
        let flight_time_s = self.flight_time()?;
        Ok(Solution {
            vx: self.velocity.vx,
            vy: self.velocity.vy,
            max_height_m: self.max_height(),
            flight_time_s,
            range_m: self.velocity.vx * flight_time_s,
        })
    }

    pub fn sample_trajectory(&self, time_of_flight_s: f64, samples: usize) -> Vec<(f64, f64)> {
        let sample_count = samples.max(2);
        (0..=sample_count)
            .map(|i| {
                let t = (i as f64 * time_of_flight_s) / sample_count as f64;
                self.position_at(t)
            })
            .collect()
    }
}

/// Solves a launch in one call.
pub fn solve(
    input: LaunchInput,
    initial_height_m: f64,
    gravity_mps2: f64,
) -> Result<Solution, LaunchError> {
    Launch::new(input, initial_height_m, gravity_mps2).solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn polar(speed_mps: f64, angle_deg: f64) -> LaunchInput {
        LaunchInput::Polar {
            speed_mps,
            angle_deg,
        }
    }

    #[test]
    fn computes_known_scenario_on_flat_ground() {
        let solution =
            solve(polar(20.0, 45.0), 0.0, EARTH_GRAVITY_MPS2).expect("calculation should succeed");

        assert_close(solution.vx, 14.142, 0.001);
        assert_close(solution.vy, 14.142, 0.001);
        assert_close(solution.max_height_m, 10.204, 0.001);
        assert_close(solution.flight_time_s, 2.886, 0.001);
        assert_close(solution.range_m, 40.816, 0.001);
        assert_eq!(
            solution.result_lines(),
            vec!["Max Height: 10.20 m".to_string(), "Range: 40.82 m".to_string()]
        );
    }

    #[test]
    fn horizontal_launch_peaks_at_launch_height() {
        let solution =
            solve(polar(15.0, 0.0), 7.5, EARTH_GRAVITY_MPS2).expect("calculation should succeed");

        assert_close(solution.vy, 0.0, 1e-12);
        assert_close(solution.max_height_m, 7.5, 1e-12);
        assert_close(solution.flight_time_s, (2.0 * 7.5 / 9.8_f64).sqrt(), 1e-9);
    }

    #[test]
    fn vertical_launch_from_ground_has_no_range() {
        let solution =
            solve(polar(25.0, 90.0), 0.0, EARTH_GRAVITY_MPS2).expect("calculation should succeed");

        assert_close(solution.range_m, 0.0, 1e-9);
        assert_close(solution.flight_time_s, 50.0 / 9.8, 1e-9);
    }

    #[test]
    fn component_input_is_used_verbatim() {
        let input = LaunchInput::Component {
            vx_mps: 3.0,
            vy_mps: -4.0,
        };
        assert_eq!(input.velocity(), Velocity { vx: 3.0, vy: -4.0 });

        let solution = solve(input, 10.0, EARTH_GRAVITY_MPS2).expect("calculation should succeed");
        // Vertex for a downward throw sits before launch, above the ledge.
        assert_close(solution.max_height_m, 10.0 + 16.0 / 19.6, 1e-9);
        assert!(solution.flight_time_s > 0.0);
    }

    #[test]
    fn larger_root_is_flight_time() {
        let launch = Launch::new(polar(10.0, 30.0), 2.0, EARTH_GRAVITY_MPS2);
        let (t1, t2) = launch.landing_roots().expect("roots should be real");
        let flight = launch.flight_time().expect("flight time should exist");

        assert!(t1.min(t2) < 0.0);
        assert_close(flight, t1.max(t2), 0.0);
        let (_, y) = launch.position_at(flight);
        assert_close(y, 0.0, 1e-9);
    }

    #[test]
    fn rejects_launch_below_ground_with_no_landing() {
        let err = solve(polar(1.0, 0.0), -10.0, EARTH_GRAVITY_MPS2)
            .expect_err("calculation should fail");

        assert!(matches!(err, LaunchError::NoRealRoot { .. }));
        assert!(err.to_string().contains("No real landing time"));
    }

    #[test]
    fn trajectory_samples_span_the_flight() {
        let launch = Launch::new(polar(20.0, 45.0), 0.0, EARTH_GRAVITY_MPS2);
        let flight = launch.flight_time().expect("flight time should exist");
        let points = launch.sample_trajectory(flight, 1);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (0.0, 0.0));
        assert_close(points[2].0, 40.816, 0.001);
        assert_close(points[2].1, 0.0, 1e-9);
    }

    #[test]
    fn polar_conversion_inverts_components() {
        let v = velocity_components(30.0, 60.0);
        let (speed, angle) = polar_from_components(v.vx, v.vy);
        assert_close(speed, 30.0, 1e-9);
        assert_close(angle, 60.0, 1e-9);
    }
}
