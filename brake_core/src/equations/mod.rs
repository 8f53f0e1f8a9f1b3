//! # Brake Equations
//!
//! All physical equations used by the calculator live here, one function per
//! stage of the brake train. Keeping them in one place makes it easy to check
//! each formula on its own and to show the chain in reports.
//!
//! ## Modules
//!
//! - [`braking`] - Hydraulic, torque, dynamics and kinematic formulas
//! - [`registry`] - Equation metadata for breakdown displays
//!
//! ## Sign Conventions
//!
//! - **Deceleration**: Positive magnitude (slowing down)
//! - **Forces and torques**: Positive when they oppose motion

pub mod braking;
pub mod registry;

// Re-export commonly used items
pub use braking::{
    braking_force_n,
    clamping_force_n,
    deceleration_ms2,
    friction_force_n,
    initial_speed_ms,
    piston_area_m2,
    stopping_distance_m,
    stopping_time_s,
    torque_per_wheel_nm,
    total_braking_torque_nm,
    WHEEL_COUNT,
};
pub use registry::{Equation, EquationCategory, EquationMetadata};
