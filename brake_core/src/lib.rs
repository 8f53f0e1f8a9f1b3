//! # brake_core - Brake Sizing Calculation Engine
//!
//! `brake_core` is the computational heart of BrakeMate, a braking
//! performance calculator for small-vehicle teams (SAE BAJA, Formula Student,
//! EV projects). It turns a handful of mechanical inputs into torque,
//! deceleration and stopping metrics, then says whether the design meets its
//! stopping-distance target.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable value records
//! - **Total**: The arithmetic never errors; degenerate inputs yield `NaN`/`Infinity`
//! - **Advisory**: Validation reports, it never blocks a calculation
//! - **JSON-First**: All records implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use brake_core::{calculate, classify, validate_all, VehicleInputs};
//!
//! let inputs = VehicleInputs::default();
//! let results = calculate(&inputs);
//! let warnings = validate_all(&inputs, &results);
//! let outcome = classify(&inputs, &results);
//!
//! println!("Stopping distance: {:.2} m", results.stopping_distance_m);
//! println!("{} message(s), status {:?}", warnings.len(), outcome.status);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Inputs, results and the braking calculation
//! - [`equations`] - Individual brake train formulas and their metadata
//! - [`validation`] - Advisory range and result checks
//! - [`classification`] - Complete/failed outcome and failure mode
//! - [`animation`] - Build animation snapshots
//! - [`report`] - One-call pipeline and display rows
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod animation;
pub mod calculations;
pub mod classification;
pub mod equations;
pub mod errors;
pub mod report;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use animation::AnimationState;
pub use calculations::{calculate, calculate_breakdown, BrakeBreakdown, BrakeResults, InputField, VehicleInputs};
pub use classification::{classify, BuildStatus, Classification, FailureType};
pub use errors::{CalcError, CalcResult};
pub use report::{evaluate, BrakeReport, Metric};
pub use validation::{validate_all, ValidationWarning, WarningKind};
