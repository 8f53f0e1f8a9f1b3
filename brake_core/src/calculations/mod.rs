//! # Braking Calculations
//!
//! Calculations follow the same pattern as the rest of the crate:
//!
//! - `VehicleInputs` - Input parameters (JSON-serializable)
//! - `BrakeResults` - Calculation results (JSON-serializable)
//! - `calculate(&inputs) -> BrakeResults` - Pure calculation function
//!
//! Unlike a design-code check, the brake calculation is total: it never
//! returns an error. Questionable inputs are reported by
//! [`crate::validation`] instead.
//!
//! ## Modules
//!
//! - [`braking`] - Straight-line braking performance
//! - [`fields`] - Input field metadata and keyed access

pub mod braking;
pub mod fields;

// Re-export commonly used types
pub use braking::{calculate, calculate_breakdown, BrakeBreakdown, BrakeResults, VehicleInputs};
pub use fields::{FieldGroup, InputField};
