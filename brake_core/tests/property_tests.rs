//! Property-based tests for the brake calculation pipeline.
//!
//! Uses proptest to verify invariants on:
//! - Determinism and the fixed four-wheel torque aggregation
//! - Monotonicity of deceleration and stopping distance in friction
//! - Success and error messages never appearing together
//! - Lock-up dominating the failure classification
//! - The exact-target boundary

use brake_core::classification::{determine_animation_status, get_failure_type};
use brake_core::validation::validate_results;
use brake_core::{
    calculate, classify, BrakeResults, BuildStatus, FailureType, VehicleInputs, WarningKind,
};
use proptest::prelude::*;

/// Physically plausible inputs with strictly positive geometry and speed.
fn plausible_inputs() -> impl Strategy<Value = VehicleInputs> {
    (
        50.0f64..2000.0,
        150.0f64..400.0,
        10.0f64..200.0,
        10.0f64..60.0,
        1.0f64..8.0,
        0.2f64..0.9,
        50.0f64..250.0,
        5.0f64..200.0,
        1.0f64..200.0,
    )
        .prop_map(
            |(mass, tire, pressure, piston, advantage, friction, radius, speed, desired)| VehicleInputs {
                vehicle_mass_kg: mass,
                tire_radius_mm: tire,
                brake_line_pressure_bar: pressure,
                piston_diameter_mm: piston,
                mechanical_advantage: advantage,
                friction_coefficient: friction,
                effective_brake_radius_mm: radius,
                initial_speed_kmh: speed,
                desired_stopping_distance_m: desired,
            },
        )
}

fn results_with(stopping_distance_m: f64, deceleration_ms2: f64) -> BrakeResults {
    BrakeResults {
        torque_per_wheel_nm: 0.0,
        total_braking_torque_nm: 0.0,
        braking_force_n: 0.0,
        deceleration_ms2,
        stopping_distance_m,
        stopping_time_s: 0.0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Identical inputs produce bit-identical results.
    #[test]
    fn prop_calculate_is_deterministic(inputs in plausible_inputs()) {
        let a = calculate(&inputs);
        let b = calculate(&inputs);
        prop_assert_eq!(a.stopping_distance_m.to_bits(), b.stopping_distance_m.to_bits());
        prop_assert_eq!(a.stopping_time_s.to_bits(), b.stopping_time_s.to_bits());
        prop_assert_eq!(a.deceleration_ms2.to_bits(), b.deceleration_ms2.to_bits());
    }

    /// Total torque is always exactly four times the per-wheel torque.
    #[test]
    fn prop_total_torque_is_four_wheels(
        inputs in plausible_inputs(),
        friction in -2.0f64..2.0,
    ) {
        let inputs = VehicleInputs { friction_coefficient: friction, ..inputs };
        let r = calculate(&inputs);
        prop_assert_eq!(r.total_braking_torque_nm, r.torque_per_wheel_nm * 4.0);
    }

    /// More friction means harder braking and a shorter stop.
    #[test]
    fn prop_friction_is_monotonic(
        inputs in plausible_inputs(),
        low in 0.05f64..1.0,
        delta in 0.01f64..0.5,
    ) {
        let softer = calculate(&VehicleInputs { friction_coefficient: low, ..inputs });
        let harder = calculate(&VehicleInputs { friction_coefficient: low + delta, ..inputs });
        prop_assert!(harder.deceleration_ms2 > softer.deceleration_ms2);
        prop_assert!(harder.stopping_distance_m < softer.stopping_distance_m);
    }

    /// Result validation never reports success next to an error.
    #[test]
    fn prop_success_excludes_error(
        inputs in plausible_inputs(),
        distance in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), 0.0f64..500.0],
        decel in prop_oneof![Just(f64::NAN), 0.0f64..30.0],
    ) {
        let warnings = validate_results(&inputs, &results_with(distance, decel));
        let has_error = warnings.iter().any(|w| w.kind == WarningKind::Error);
        let has_success = warnings.iter().any(|w| w.kind == WarningKind::Success);
        prop_assert!(has_error != has_success);
    }

    /// Above 1 g the outcome is always sliding, whatever the distance.
    #[test]
    fn prop_lockup_dominates(
        inputs in plausible_inputs(),
        distance in 0.0f64..10_000.0,
        decel in 9.82f64..100.0,
    ) {
        let results = results_with(distance, decel);
        prop_assert_eq!(determine_animation_status(&results, &inputs), BuildStatus::Failed);
        prop_assert_eq!(get_failure_type(&results, &inputs), Some(FailureType::Sliding));
    }

    /// Stopping exactly on target is neither an error nor a failure.
    #[test]
    fn prop_exact_target_completes(
        inputs in plausible_inputs(),
        decel in 3.0f64..9.81,
    ) {
        let results = results_with(inputs.desired_stopping_distance_m, decel);
        let warnings = validate_results(&inputs, &results);
        prop_assert!(warnings.iter().all(|w| w.kind != WarningKind::Error));
        let outcome = classify(&inputs, &results);
        prop_assert_eq!(outcome.status, BuildStatus::Complete);
        prop_assert_eq!(outcome.failure_type, None);
    }

    /// The classifier never produces tilting.
    #[test]
    fn prop_never_tilting(inputs in plausible_inputs()) {
        let outcome = classify(&inputs, &calculate(&inputs));
        prop_assert_ne!(outcome.failure_type, Some(FailureType::Tilting));
        prop_assert_eq!(outcome.status == BuildStatus::Failed, outcome.failure_type.is_some());
    }
}

#[test]
fn stopping_metrics_diverge_as_deceleration_vanishes() {
    let base = VehicleInputs::default();
    let mut previous = calculate(&base).stopping_distance_m;
    for friction in [0.1, 0.01, 0.001, 1e-6, 1e-12] {
        let r = calculate(&VehicleInputs { friction_coefficient: friction, ..base });
        assert!(r.stopping_distance_m > previous);
        previous = r.stopping_distance_m;
    }
    assert!(previous > 1e12);

    let stopped = calculate(&VehicleInputs { friction_coefficient: 0.0, ..base });
    assert_eq!(stopped.stopping_distance_m, f64::INFINITY);
    assert_eq!(stopped.stopping_time_s, f64::INFINITY);
}
