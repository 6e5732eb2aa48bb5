//! Property-based tests for the kinematics solver and the input-mode switch:
//! - Range and peak bounds over the slider domain
//! - Polar/component round-trips
//! - Boundary launches (flat, vertical)
//! - The animation always terminates on the ground threshold

use parabolic_viz::core::animation::{Animation, CancelToken, TickOutcome, TickParams};
use parabolic_viz::core::ballistics::{
    EARTH_GRAVITY_MPS2, Launch, LaunchInput, polar_from_components, solve, velocity_components,
};
use parabolic_viz::core::config::{FieldRanges, VisualizerConfig};
use parabolic_viz::core::controls::LinkedField;
use parabolic_viz::core::modes::{InputMode, switch_mode};
use parabolic_viz::core::scene::Scene;
use proptest::prelude::*;

fn polar(speed_mps: f64, angle_deg: f64) -> LaunchInput {
    LaunchInput::Polar {
        speed_mps,
        angle_deg,
    }
}

proptest! {
    /// Any launch inside the slider ranges lands at a non-negative range and
    /// peaks at or above the launch height.
    #[test]
    fn range_and_peak_are_bounded(
        speed in 0.0f64..=50.0,
        angle in 0.0f64..=90.0,
        height in 0.0f64..=30.0,
    ) {
        let solution = solve(polar(speed, angle), height, EARTH_GRAVITY_MPS2)
            .expect("ground-level or higher launches always land");

        prop_assert!(solution.range_m >= -1e-9, "range {}", solution.range_m);
        prop_assert!(solution.max_height_m >= height);
        prop_assert!(solution.flight_time_s >= 0.0);
    }

    /// The chosen flight time really is a landing time.
    #[test]
    fn flight_time_returns_to_the_floor(
        speed in 0.0f64..=50.0,
        angle in 0.0f64..=90.0,
        height in 0.0f64..=30.0,
    ) {
        let launch = Launch::new(polar(speed, angle), height, EARTH_GRAVITY_MPS2);
        let t = launch.flight_time().expect("real roots");
        let (_, y) = launch.position_at(t);
        prop_assert!(y.abs() < 1e-6, "y at landing = {y}");
    }

    #[test]
    fn polar_component_round_trip(
        speed in 0.01f64..=50.0,
        angle in 0.0f64..=90.0,
    ) {
        let v = velocity_components(speed, angle);
        let (speed_back, angle_back) = polar_from_components(v.vx, v.vy);
        prop_assert!((speed_back - speed).abs() < 1e-9);
        prop_assert!((angle_back - angle).abs() < 1e-6);
    }

    /// Switching modes twice through the displayed two-decimal values stays
    /// within rounding of the starting inputs.
    #[test]
    fn mode_switch_round_trip_through_fields(
        speed in 1.0f64..=50.0,
        angle in 0.0f64..=90.0,
    ) {
        let ranges = FieldRanges::default();
        let mut first = LinkedField::new("Speed (m/s)", 0.0, ranges.speed);
        let mut second = LinkedField::new("Angle (°)", 0.0, ranges.angle);
        first.set_from_text(speed.to_string());
        second.set_from_text(angle.to_string());

        let mode = switch_mode(InputMode::Polar, &mut first, &mut second, &ranges);
        let mode = switch_mode(mode, &mut first, &mut second, &ranges);

        prop_assert_eq!(mode, InputMode::Polar);
        let speed_back = first.value().expect("numeric");
        let angle_back = second.value().expect("numeric");
        prop_assert!((speed_back - speed).abs() < 0.02, "{speed} -> {speed_back}");
        prop_assert!((angle_back - angle).abs() < 1.0, "{angle} -> {angle_back}");
    }

    #[test]
    fn flat_launch_peaks_at_height(speed in 0.0f64..=50.0, height in 0.0f64..=30.0) {
        let solution = solve(polar(speed, 0.0), height, EARTH_GRAVITY_MPS2).expect("lands");
        prop_assert_eq!(solution.vy, 0.0);
        prop_assert_eq!(solution.max_height_m, height);
    }

    #[test]
    fn vertical_launch_from_ground_goes_nowhere(speed in 0.0f64..=50.0) {
        let solution = solve(polar(speed, 90.0), 0.0, EARTH_GRAVITY_MPS2).expect("lands");
        prop_assert!(solution.range_m.abs() < 1e-9);
    }

    /// Every animation reaches a threshold and then stays put.
    #[test]
    fn animation_always_lands(
        speed in 0.0f64..=50.0,
        angle in 0.0f64..=90.0,
        height in 0.0f64..=30.0,
    ) {
        let launch = Launch::new(polar(speed, angle), height, EARTH_GRAVITY_MPS2);
        let params = TickParams::from(&VisualizerConfig::default());
        let mut animation = Animation::new(launch, params, CancelToken::new());
        let mut scene = Scene::new();
        animation.start();

        let mut outcome = TickOutcome::Continue;
        for _ in 0..2_000 {
            outcome = animation.tick(&mut scene);
            if outcome != TickOutcome::Continue {
                break;
            }
        }

        prop_assert!(matches!(outcome, TickOutcome::Landed { .. }), "{outcome:?}");
        prop_assert!(scene.particle.bottom >= 0.0);
        prop_assert_eq!(animation.tick(&mut scene), TickOutcome::Inactive);
    }
}
