//! # Outcome Classification
//!
//! Reduces a calculation to the state the build animation should end in:
//! the car either completes, or fails in a specific way.
//!
//! Conditions are evaluated in a fixed order and the first match wins:
//!
//! 1. Deceleration above 1 g → failed, sliding
//! 2. Stopping distance above 1.5 × desired → failed, insufficient braking
//! 3. Stopping distance above desired → failed, insufficient braking
//! 4. Otherwise → complete
//!
//! Lock-up therefore dominates: a car that would slide is reported as
//! sliding even when it also overshoots the target distance.
//!
//! [`FailureType::Tilting`] is a valid value for front ends to render, but
//! no rule here produces it.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::calculations::{calculate, VehicleInputs};
//! use brake_core::classification::{classify, BuildStatus, FailureType};
//!
//! let inputs = VehicleInputs::default();
//! let outcome = classify(&inputs, &calculate(&inputs));
//! assert_eq!(outcome.status, BuildStatus::Failed);
//! assert_eq!(outcome.failure_type, Some(FailureType::InsufficientBraking));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::braking::{BrakeResults, VehicleInputs};
use crate::validation::LOCKUP_DECELERATION_MS2;

/// Multiple of the desired distance treated as a gross overshoot
pub const GROSS_OVERSHOOT_FACTOR: f64 = 1.5;

/// State of the build animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    #[default]
    Building,
    Complete,
    Failed,
}

/// How a failed design fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureType {
    /// Wheels lock and the car slides
    Sliding,
    /// Car pitches over; never produced by [`get_failure_type`]
    Tilting,
    /// Car cannot stop within the desired distance
    InsufficientBraking,
}

impl FailureType {
    pub fn description(&self) -> &'static str {
        match self {
            FailureType::Sliding => "wheels lock up and the car slides",
            FailureType::Tilting => "the car tilts under braking",
            FailureType::InsufficientBraking => "the car cannot stop within the desired distance",
        }
    }
}

/// Status and failure type produced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub status: BuildStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_type: Option<FailureType>,
}

impl Classification {
    pub fn is_failed(&self) -> bool {
        self.status == BuildStatus::Failed
    }
}

/// Final animation status for a calculation. Never returns `Building`.
pub fn determine_animation_status(results: &BrakeResults, inputs: &VehicleInputs) -> BuildStatus {
    if results.deceleration_ms2 > LOCKUP_DECELERATION_MS2 {
        return BuildStatus::Failed;
    }

    if results.stopping_distance_m > inputs.desired_stopping_distance_m * GROSS_OVERSHOOT_FACTOR {
        return BuildStatus::Failed;
    }

    if results.stopping_distance_m > inputs.desired_stopping_distance_m {
        return BuildStatus::Failed;
    }

    BuildStatus::Complete
}

/// Failure mode for a calculation, `None` when it completes.
pub fn get_failure_type(results: &BrakeResults, inputs: &VehicleInputs) -> Option<FailureType> {
    if results.deceleration_ms2 > LOCKUP_DECELERATION_MS2 {
        return Some(FailureType::Sliding);
    }

    if results.stopping_distance_m > inputs.desired_stopping_distance_m * GROSS_OVERSHOOT_FACTOR {
        return Some(FailureType::InsufficientBraking);
    }

    if results.stopping_distance_m > inputs.desired_stopping_distance_m {
        return Some(FailureType::InsufficientBraking);
    }

    None
}

/// Status and failure type in one call.
pub fn classify(inputs: &VehicleInputs, results: &BrakeResults) -> Classification {
    Classification {
        status: determine_animation_status(results, inputs),
        failure_type: get_failure_type(results, inputs),
    }
}
