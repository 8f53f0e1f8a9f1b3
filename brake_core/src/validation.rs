//! # Validation
//!
//! Advisory checks over the inputs and results of a brake calculation.
//! Nothing here rejects a calculation; every check produces a
//! [`ValidationWarning`] for the front end to display, in check order.
//!
//! ## Thresholds
//!
//! | Check | Range / limit | Kind |
//! |---|---|---|
//! | Vehicle mass | 50-2000 kg | warning |
//! | Friction coefficient | 0.2-0.9 | warning |
//! | Brake line pressure | 10-200 bar | warning |
//! | Stopping distance | ≤ desired | error |
//! | Deceleration | ≤ 9.81 m/s² (lock-up) | warning |
//! | Deceleration | ≥ 3 m/s² | warning |
//!
//! Ranges are inclusive. Comparisons involving `NaN` are false, so a `NaN`
//! input or result never triggers a check.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::calculations::{calculate, VehicleInputs};
//! use brake_core::validation::{validate_all, WarningKind};
//!
//! let inputs = VehicleInputs::default();
//! let results = calculate(&inputs);
//! let warnings = validate_all(&inputs, &results);
//!
//! // The default scenario stops in ~614 m against a 25 m target
//! assert_eq!(warnings[0].kind, WarningKind::Error);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::braking::{BrakeResults, VehicleInputs};
use crate::units::STANDARD_GRAVITY_MS2;

/// Typical vehicle mass range (kg)
pub const VEHICLE_MASS_RANGE_KG: (f64, f64) = (50.0, 2000.0);

/// Typical pad friction coefficient range
pub const FRICTION_COEFFICIENT_RANGE: (f64, f64) = (0.2, 0.9);

/// Typical brake line pressure range (bar)
pub const BRAKE_LINE_PRESSURE_RANGE_BAR: (f64, f64) = (10.0, 200.0);

/// Deceleration above which wheels are expected to lock (m/s²)
pub const LOCKUP_DECELERATION_MS2: f64 = STANDARD_GRAVITY_MS2;

/// Deceleration below which braking is considered weak (m/s²)
pub const LOW_DECELERATION_MS2: f64 = 3.0;

/// Severity of a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Error,
    Warning,
    Success,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Error => "error",
            WarningKind::Warning => "warning",
            WarningKind::Success => "success",
        }
    }
}

/// One advisory message.
///
/// ## JSON Example
///
/// ```json
/// { "type": "warning", "message": "Low deceleration - consider increasing braking force" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        ValidationWarning {
            kind,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Warning, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Success, message)
    }
}

fn outside(value: f64, (min, max): (f64, f64)) -> bool {
    value < min || value > max
}

/// Range checks over the raw inputs. Only ever produces warnings.
pub fn validate_inputs(inputs: &VehicleInputs) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if outside(inputs.vehicle_mass_kg, VEHICLE_MASS_RANGE_KG) {
        warnings.push(ValidationWarning::warning(
            "Vehicle mass seems unusual (typical range: 50-2000 kg)",
        ));
    }

    if outside(inputs.friction_coefficient, FRICTION_COEFFICIENT_RANGE) {
        warnings.push(ValidationWarning::warning(
            "Friction coefficient seems unusual (typical range: 0.2-0.9)",
        ));
    }

    if outside(inputs.brake_line_pressure_bar, BRAKE_LINE_PRESSURE_RANGE_BAR) {
        warnings.push(ValidationWarning::warning(
            "Brake line pressure seems unusual (typical range: 10-200 bar)",
        ));
    }

    warnings
}

/// Checks over the calculated results.
///
/// A success entry is appended when nothing fired or when every entry is a
/// warning, so success can sit next to warnings but never next to an error.
pub fn validate_results(inputs: &VehicleInputs, results: &BrakeResults) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if results.stopping_distance_m > inputs.desired_stopping_distance_m {
        warnings.push(ValidationWarning::error(format!(
            "Stopping distance ({}m) exceeds desired distance ({}m)",
            format_fixed(results.stopping_distance_m, 2),
            format_number(inputs.desired_stopping_distance_m),
        )));
    }

    if results.deceleration_ms2 > LOCKUP_DECELERATION_MS2 {
        warnings.push(ValidationWarning::warning(
            "Deceleration exceeds 1G - wheels may lock up causing sliding",
        ));
    }

    if results.deceleration_ms2 < LOW_DECELERATION_MS2 {
        warnings.push(ValidationWarning::warning(
            "Low deceleration - consider increasing braking force",
        ));
    }

    if warnings.iter().all(|w| w.kind == WarningKind::Warning) {
        warnings.push(ValidationWarning::success(
            "Braking system parameters are within acceptable range!",
        ));
    }

    warnings
}

/// Input checks followed by result checks.
pub fn validate_all(inputs: &VehicleInputs, results: &BrakeResults) -> Vec<ValidationWarning> {
    let mut warnings = validate_inputs(inputs);
    warnings.extend(validate_results(inputs, results));
    warnings
}

/// Digits after the point that hold the exact expansion of any f64
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which fixed-point output falls back to exponent notation
const FIXED_POINT_LIMIT: f64 = 1e21;

/// Fixed-point formatting with ties rounded away from zero.
///
/// Rounding works on the exact decimal expansion, so `30.125` (exactly
/// representable) gives `30.13` while `1.005` (stored just below) gives
/// `1.00`. Magnitudes of 1e21 and above use [`format_number`].
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    if value.abs() >= FIXED_POINT_LIMIT {
        return format_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(decimals).is_some_and(|&b| b >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Shortest round-trip formatting (`25`, `12.5`), non-finite spelled out.
///
/// Exponent notation (`1e+21`, `1.5e-7`) is used below 1e-6 and from 1e21 up.
pub(crate) fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // Shortest digits plus decimal exponent, e.g. "1.25e1"
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    let point = exponent + 1;

    if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.unsigned_abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.unsigned_abs())
        }
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}
