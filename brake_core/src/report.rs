//! # Brake Report
//!
//! One pass of the whole pipeline: validate the inputs, calculate, validate
//! the results, classify. Front ends call [`evaluate`] on every input change
//! and render the returned [`BrakeReport`]; nothing is carried between calls.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::calculations::VehicleInputs;
//! use brake_core::report::evaluate;
//!
//! let report = evaluate(VehicleInputs::default());
//! assert!(report.has_errors());
//!
//! let stopping = &report.metrics()[5];
//! assert_eq!(stopping.label, "Stopping Distance");
//! assert_eq!(stopping.value, "614.02");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::braking::{calculate, BrakeResults, VehicleInputs};
use crate::classification::{classify, Classification};
use crate::errors::CalcResult;
use crate::validation::{format_fixed, validate_inputs, validate_results, ValidationWarning, WarningKind};

/// A labelled result value formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    /// Value rounded to two decimals
    pub value: String,
    pub unit: &'static str,
}

/// Everything a front end needs to render one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrakeReport {
    pub inputs: VehicleInputs,
    pub results: BrakeResults,
    /// Input checks first, then result checks
    pub warnings: Vec<ValidationWarning>,
    pub classification: Classification,
}

impl BrakeReport {
    /// Result rows in display order.
    pub fn metrics(&self) -> Vec<Metric> {
        let r = &self.results;
        let row = |label: &'static str, value: f64, unit: &'static str| Metric {
            label,
            value: format_fixed(value, 2),
            unit,
        };
        vec![
            row("Torque per Wheel", r.torque_per_wheel_nm, "Nm"),
            row("Total Braking Torque", r.total_braking_torque_nm, "Nm"),
            row("Braking Force", r.braking_force_n, "N"),
            row("Deceleration", r.deceleration_ms2, "m/s²"),
            row("Deceleration (G-force)", r.deceleration_g(), "g"),
            row("Stopping Distance", r.stopping_distance_m, "m"),
            row("Stopping Time", r.stopping_time_s, "s"),
        ]
    }

    pub fn has_errors(&self) -> bool {
        self.warnings.iter().any(|w| w.kind == WarningKind::Error)
    }

    /// Warnings of one kind, in check order
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &ValidationWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }

    /// Serialize to pretty JSON. Non-finite numbers are written as `null`.
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full calculate → validate → classify pipeline.
pub fn evaluate(inputs: VehicleInputs) -> BrakeReport {
    let mut warnings = validate_inputs(&inputs);
    let results = calculate(&inputs);
    warnings.extend(validate_results(&inputs, &results));
    let classification = classify(&inputs, &results);

    log::debug!(
        "evaluated brakes: decel={:.3} m/s² stop={:.2} m status={:?} failure={:?} warnings={}",
        results.deceleration_ms2,
        results.stopping_distance_m,
        classification.status,
        classification.failure_type,
        warnings.len()
    );

    BrakeReport {
        inputs,
        results,
        warnings,
        classification,
    }
}
