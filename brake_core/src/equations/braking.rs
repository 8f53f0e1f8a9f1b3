//! # Brake Train Formulas
//!
//! Closed-form equations for each stage of a hydraulic disc brake, from line
//! pressure at the caliper to the kinematic stopping metrics of the vehicle.
//!
//! ## Notation
//!
//! - `p` = Brake line pressure (bar)
//! - `d_p` = Caliper piston diameter (mm)
//! - `A` = Piston area (m²)
//! - `F_c` = Clamping force (N)
//! - `μ` = Pad friction coefficient
//! - `F_f` = Pad friction force (N)
//! - `r_e` = Effective brake (rotor) radius (mm)
//! - `MA` = Mechanical advantage
//! - `T_w` = Torque per wheel (N·m)
//! - `T` = Total braking torque (N·m)
//! - `r_t` = Tire rolling radius (mm)
//! - `F_b` = Braking force at the contact patch (N)
//! - `m` = Vehicle mass (kg)
//! - `a` = Deceleration (m/s²)
//! - `v` = Initial speed (m/s)
//!
//! ## Simplifications
//!
//! - Every wheel is braked identically (four wheels, fixed)
//! - No weight transfer, no tire-load sensitivity, no thermal fade
//! - Constant deceleration from `v` to rest in a straight line
//!
//! None of these functions guard against zero or negative divisors; IEEE
//! `Infinity`/`NaN` propagate to the caller.

use crate::units::{Bar, KmPerHour, Meters, MetersPerSecond, Millimeters};

/// Number of braked wheels
pub const WHEEL_COUNT: f64 = 4.0;

/// Divisor turning a diameter in mm into a radius in m
pub const DIAMETER_MM_TO_RADIUS_M: f64 = 2000.0;

/// Scalar applied to line pressure before multiplying by piston area
pub const PRESSURE_FORCE_SCALAR: f64 = 1000.0;

// =============================================================================
// HYDRAULICS
// =============================================================================

/// Calculate caliper piston area from its diameter
///
/// # Formula
/// A = π · (d_p / 2000)²
///
/// # Example
/// ```rust
/// use brake_core::equations::braking::piston_area_m2;
/// use brake_core::units::Millimeters;
///
/// let area = piston_area_m2(Millimeters(30.0));
/// assert!((area - 7.0686e-4).abs() < 1e-7);
/// ```
#[inline]
pub fn piston_area_m2(piston_diameter: Millimeters) -> f64 {
    std::f64::consts::PI * (piston_diameter.0 / DIAMETER_MM_TO_RADIUS_M).powi(2)
}

/// Calculate pad clamping force
///
/// # Formula
/// F_c = p · 1000 · A
#[inline]
pub fn clamping_force_n(pressure: Bar, piston_area_m2: f64) -> f64 {
    pressure.0 * PRESSURE_FORCE_SCALAR * piston_area_m2
}

/// Calculate pad friction force
///
/// # Formula
/// F_f = F_c · μ
#[inline]
pub fn friction_force_n(clamping_force_n: f64, friction_coefficient: f64) -> f64 {
    clamping_force_n * friction_coefficient
}

// =============================================================================
// TORQUE
// =============================================================================

/// Calculate brake torque at a single wheel
///
/// # Formula
/// T_w = F_f · (r_e / 1000) · MA
#[inline]
pub fn torque_per_wheel_nm(
    friction_force_n: f64,
    effective_brake_radius: Millimeters,
    mechanical_advantage: f64,
) -> f64 {
    friction_force_n * Meters::from(effective_brake_radius).0 * mechanical_advantage
}

/// Aggregate wheel torque over all braked wheels
///
/// # Formula
/// T = T_w · 4
#[inline]
pub fn total_braking_torque_nm(torque_per_wheel_nm: f64) -> f64 {
    torque_per_wheel_nm * WHEEL_COUNT
}

// =============================================================================
// VEHICLE DYNAMICS
// =============================================================================

/// Convert total torque into a braking force at the tire contact patch
///
/// # Formula
/// F_b = T / (r_t / 1000)
#[inline]
pub fn braking_force_n(total_braking_torque_nm: f64, tire_radius: Millimeters) -> f64 {
    total_braking_torque_nm / Meters::from(tire_radius).0
}

/// Calculate linear deceleration
///
/// # Formula
/// a = F_b / m
#[inline]
pub fn deceleration_ms2(braking_force_n: f64, vehicle_mass_kg: f64) -> f64 {
    braking_force_n / vehicle_mass_kg
}

/// Convert the initial speed to m/s
///
/// # Formula
/// v = v_kmh / 3.6
#[inline]
pub fn initial_speed_ms(initial_speed: KmPerHour) -> MetersPerSecond {
    initial_speed.into()
}

// =============================================================================
// KINEMATICS
// Constant deceleration from v to rest
// =============================================================================

/// Calculate stopping distance
///
/// # Formula
/// s = v² / (2a)
///
/// # Example
/// ```rust
/// use brake_core::equations::braking::stopping_distance_m;
/// use brake_core::units::MetersPerSecond;
///
/// // 20 m/s at 8 m/s² stops in 25 m
/// assert_eq!(stopping_distance_m(MetersPerSecond(20.0), 8.0), 25.0);
/// ```
#[inline]
pub fn stopping_distance_m(speed: MetersPerSecond, deceleration_ms2: f64) -> f64 {
    speed.0.powi(2) / (2.0 * deceleration_ms2)
}

/// Calculate stopping time
///
/// # Formula
/// t = v / a
#[inline]
pub fn stopping_time_s(speed: MetersPerSecond, deceleration_ms2: f64) -> f64 {
    speed.0 / deceleration_ms2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-12
    }

    #[test]
    fn test_piston_area() {
        // 30 mm piston -> r = 0.015 m
        let area = piston_area_m2(Millimeters(30.0));
        assert!(approx_eq(area, std::f64::consts::PI * 0.015 * 0.015), "A = {}", area);
    }

    #[test]
    fn test_clamping_force() {
        let force = clamping_force_n(Bar(50.0), 1.0e-3);
        assert!(approx_eq(force, 50.0), "F_c = {}", force);
    }

    #[test]
    fn test_torque_chain() {
        // 100 N friction, 100 mm radius, MA 2 -> 20 N·m per wheel
        let t = torque_per_wheel_nm(100.0, Millimeters(100.0), 2.0);
        assert!(approx_eq(t, 20.0), "T_w = {}", t);
        assert_eq!(total_braking_torque_nm(t), t * 4.0);
    }

    #[test]
    fn test_braking_force_and_deceleration() {
        // 100 N·m over a 250 mm tire -> 400 N; 400 N on 200 kg -> 2 m/s²
        let f = braking_force_n(100.0, Millimeters(250.0));
        assert!(approx_eq(f, 400.0), "F_b = {}", f);
        assert!(approx_eq(deceleration_ms2(f, 200.0), 2.0));
    }

    #[test]
    fn test_kinematics() {
        let v = initial_speed_ms(KmPerHour(72.0));
        assert!(approx_eq(v.0, 20.0));
        assert!(approx_eq(stopping_distance_m(v, 10.0), 20.0));
        assert!(approx_eq(stopping_time_s(v, 10.0), 2.0));
    }

    #[test]
    fn test_zero_deceleration_is_unguarded() {
        let v = MetersPerSecond(10.0);
        assert_eq!(stopping_distance_m(v, 0.0), f64::INFINITY);
        assert_eq!(stopping_time_s(v, 0.0), f64::INFINITY);

        let still = MetersPerSecond(0.0);
        assert!(stopping_distance_m(still, 0.0).is_nan());
        assert!(stopping_time_s(still, 0.0).is_nan());
    }

    #[test]
    fn test_zero_tire_radius_is_unguarded() {
        assert_eq!(braking_force_n(10.0, Millimeters(0.0)), f64::INFINITY);
    }
}
