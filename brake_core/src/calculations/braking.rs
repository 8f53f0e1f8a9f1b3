//! # Braking Performance Calculation
//!
//! Straight-line braking estimate for a four-wheel vehicle with hydraulic
//! disc brakes.
//!
//! ## Assumptions
//!
//! - All four wheels braked identically
//! - No weight transfer, tire-load sensitivity or brake fade
//! - Constant deceleration from the initial speed to rest
//! - Inputs are never rejected; degenerate values flow through as
//!   `NaN`/`Infinity`
//!
//! ## Example
//!
//! ```rust
//! use brake_core::calculations::braking::{calculate, VehicleInputs};
//!
//! let inputs = VehicleInputs {
//!     vehicle_mass_kg: 200.0,
//!     brake_line_pressure_bar: 150.0,
//!     piston_diameter_mm: 40.0,
//!     mechanical_advantage: 5.0,
//!     friction_coefficient: 0.9,
//!     effective_brake_radius_mm: 200.0,
//!     tire_radius_mm: 200.0,
//!     ..VehicleInputs::default()
//! };
//!
//! let results = calculate(&inputs);
//! assert!(results.deceleration_ms2 > 9.81);
//! assert_eq!(results.total_braking_torque_nm, results.torque_per_wheel_nm * 4.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::braking as eq;
use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::units::{Bar, Gs, KmPerHour, MetersPerSecondSq, Millimeters};

/// Mechanical inputs describing a vehicle and its brake system.
///
/// No field is constrained; range checks live in [`crate::validation`] and
/// are advisory only. Missing keys in JSON fall back to the default
/// scenario; unknown keys are rejected.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vehicle_mass_kg": 250.0,
///   "tire_radius_mm": 250.0,
///   "brake_line_pressure_bar": 50.0,
///   "piston_diameter_mm": 30.0,
///   "mechanical_advantage": 2.5,
///   "friction_coefficient": 0.4,
///   "effective_brake_radius_mm": 100.0,
///   "initial_speed_kmh": 60.0,
///   "desired_stopping_distance_m": 25.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleInputs {
    /// Total vehicle mass including driver (kg)
    pub vehicle_mass_kg: f64,

    /// Loaded tire rolling radius (mm)
    pub tire_radius_mm: f64,

    /// Hydraulic line pressure at the caliper (bar)
    pub brake_line_pressure_bar: f64,

    /// Caliper piston diameter (mm)
    pub piston_diameter_mm: f64,

    /// Leverage between caliper force and rotor torque
    pub mechanical_advantage: f64,

    /// Pad-on-rotor friction coefficient (physically 0-1)
    pub friction_coefficient: f64,

    /// Radius from hub center to the pad's center of pressure (mm)
    pub effective_brake_radius_mm: f64,

    /// Speed when braking starts (km/h)
    pub initial_speed_kmh: f64,

    /// Stopping distance the design must achieve (m)
    pub desired_stopping_distance_m: f64,
}

impl Default for VehicleInputs {
    /// A light single-seater at 60 km/h, the scenario the calculator opens with.
    fn default() -> Self {
        VehicleInputs {
            vehicle_mass_kg: 250.0,
            tire_radius_mm: 250.0,
            brake_line_pressure_bar: 50.0,
            piston_diameter_mm: 30.0,
            mechanical_advantage: 2.5,
            friction_coefficient: 0.4,
            effective_brake_radius_mm: 100.0,
            initial_speed_kmh: 60.0,
            desired_stopping_distance_m: 25.0,
        }
    }
}

impl VehicleInputs {
    /// Parse inputs from a JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brake_core::calculations::VehicleInputs;
    ///
    /// let inputs = VehicleInputs::from_json(r#"{"vehicle_mass_kg": 300.0}"#).unwrap();
    /// assert_eq!(inputs.vehicle_mass_kg, 300.0);
    /// assert_eq!(inputs.tire_radius_mm, 250.0);
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Results of one braking calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "torque_per_wheel_nm": 3.53,
///   "total_braking_torque_nm": 14.14,
///   "braking_force_n": 56.55,
///   "deceleration_ms2": 0.23,
///   "stopping_distance_m": 614.02,
///   "stopping_time_s": 73.68
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakeResults {
    /// Brake torque at one wheel (N·m)
    pub torque_per_wheel_nm: f64,

    /// Sum of torque over all four wheels (N·m)
    pub total_braking_torque_nm: f64,

    /// Retarding force at the tire contact patches (N)
    pub braking_force_n: f64,

    /// Linear deceleration magnitude (m/s²)
    pub deceleration_ms2: f64,

    /// Distance to rest from the initial speed (m)
    pub stopping_distance_m: f64,

    /// Time to rest from the initial speed (s)
    pub stopping_time_s: f64,
}

impl BrakeResults {
    /// Deceleration as a multiple of 1 g (9.81 m/s²)
    pub fn deceleration_g(&self) -> f64 {
        Gs::from(MetersPerSecondSq(self.deceleration_ms2)).0
    }
}

/// Intermediate values of one calculation, stage by stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakeBreakdown {
    /// Caliper piston area (m²)
    pub piston_area_m2: f64,

    /// Pad clamping force (N)
    pub clamping_force_n: f64,

    /// Pad friction force (N)
    pub friction_force_n: f64,

    /// Initial speed (m/s)
    pub initial_speed_ms: f64,

    /// Final results
    pub results: BrakeResults,
}

impl BrakeBreakdown {
    /// Each equation paired with the value it produced, in evaluation order.
    pub fn stages(&self) -> Vec<(Equation, f64)> {
        Equation::ALL
            .iter()
            .map(|&equation| (equation, self.value_of(equation)))
            .collect()
    }

    /// Value produced by a single equation
    pub fn value_of(&self, equation: Equation) -> f64 {
        match equation {
            Equation::PistonArea => self.piston_area_m2,
            Equation::ClampingForce => self.clamping_force_n,
            Equation::FrictionForce => self.friction_force_n,
            Equation::TorquePerWheel => self.results.torque_per_wheel_nm,
            Equation::TotalBrakingTorque => self.results.total_braking_torque_nm,
            Equation::BrakingForce => self.results.braking_force_n,
            Equation::Deceleration => self.results.deceleration_ms2,
            Equation::InitialSpeed => self.initial_speed_ms,
            Equation::StoppingDistance => self.results.stopping_distance_m,
            Equation::StoppingTime => self.results.stopping_time_s,
        }
    }
}

/// Run the full equation chain, keeping every intermediate value.
pub fn calculate_breakdown(input: &VehicleInputs) -> BrakeBreakdown {
    // === Hydraulics ===
    let piston_area_m2 = eq::piston_area_m2(Millimeters(input.piston_diameter_mm));
    let clamping_force_n = eq::clamping_force_n(Bar(input.brake_line_pressure_bar), piston_area_m2);
    let friction_force_n = eq::friction_force_n(clamping_force_n, input.friction_coefficient);

    // === Torque ===
    let torque_per_wheel_nm = eq::torque_per_wheel_nm(
        friction_force_n,
        Millimeters(input.effective_brake_radius_mm),
        input.mechanical_advantage,
    );
    let total_braking_torque_nm = eq::total_braking_torque_nm(torque_per_wheel_nm);

    // === Vehicle Dynamics ===
    let braking_force_n = eq::braking_force_n(total_braking_torque_nm, Millimeters(input.tire_radius_mm));
    let deceleration_ms2 = eq::deceleration_ms2(braking_force_n, input.vehicle_mass_kg);

    // === Kinematics ===
    let speed = eq::initial_speed_ms(KmPerHour(input.initial_speed_kmh));
    let stopping_distance_m = eq::stopping_distance_m(speed, deceleration_ms2);
    let stopping_time_s = eq::stopping_time_s(speed, deceleration_ms2);

    let breakdown = BrakeBreakdown {
        piston_area_m2,
        clamping_force_n,
        friction_force_n,
        initial_speed_ms: speed.0,
        results: BrakeResults {
            torque_per_wheel_nm,
            total_braking_torque_nm,
            braking_force_n,
            deceleration_ms2,
            stopping_distance_m,
            stopping_time_s,
        },
    };
    log::trace!("brake breakdown: {:?}", breakdown);
    breakdown
}

/// Calculate braking performance.
///
/// Total function: never fails, never panics. Division by a zero tire
/// radius, mass or deceleration yields `Infinity` or `NaN` in the results.
///
/// # Example
///
/// ```rust
/// use brake_core::calculations::braking::{calculate, VehicleInputs};
///
/// let results = calculate(&VehicleInputs::default());
/// assert!((results.stopping_distance_m - 614.02).abs() < 0.01);
/// ```
pub fn calculate(input: &VehicleInputs) -> BrakeResults {
    calculate_breakdown(input).results
}
