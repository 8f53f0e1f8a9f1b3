//! # Unit Types
//!
//! Type-safe wrappers for the small, fixed set of units the calculator
//! accepts. These are plain f64 newtypes that serialize as bare numbers.
//!
//! ## Unit Set
//!
//! Inputs arrive in the units a brake designer reads off a spec sheet:
//! - Length: millimeters (mm) for tire, piston and rotor geometry
//! - Distance: meters (m) for stopping distance
//! - Speed: kilometers per hour (km/h)
//! - Pressure: bar
//!
//! Internally everything is converted to meters, meters per second and
//! m/s² before it enters an equation.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::units::{KmPerHour, Meters, MetersPerSecond, Millimeters};
//!
//! let radius: Meters = Millimeters(250.0).into();
//! assert_eq!(radius.0, 0.25);
//!
//! let speed: MetersPerSecond = KmPerHour(36.0).into();
//! assert!((speed.0 - 10.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Millimeters per meter
pub const MM_PER_M: f64 = 1000.0;

/// km/h per m/s
pub const KMH_PER_MS: f64 = 3.6;

/// Standard gravity used as the 1 g reference (m/s²)
pub const STANDARD_GRAVITY_MS2: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHour(pub f64);

/// Speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

impl From<KmPerHour> for MetersPerSecond {
    fn from(kmh: KmPerHour) -> Self {
        MetersPerSecond(kmh.0 / KMH_PER_MS)
    }
}

// ============================================================================
// Acceleration Units
// ============================================================================

/// Acceleration in meters per second squared
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecondSq(pub f64);

/// Acceleration as a multiple of standard gravity
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gs(pub f64);

impl From<MetersPerSecondSq> for Gs {
    fn from(a: MetersPerSecondSq) -> Self {
        Gs(a.0 / STANDARD_GRAVITY_MS2)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Hydraulic line pressure in bar
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar(pub f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let m: Meters = Millimeters(100.0).into();
        assert_eq!(m.0, 0.1);
    }

    #[test]
    fn test_kmh_to_ms() {
        let ms: MetersPerSecond = KmPerHour(60.0).into();
        assert_eq!(ms.0, 60.0 / 3.6);
    }

    #[test]
    fn test_gs() {
        let g: Gs = MetersPerSecondSq(9.81).into();
        assert_eq!(g.0, 1.0);
    }

    #[test]
    fn test_serialization() {
        let bar = Bar(50.0);
        let json = serde_json::to_string(&bar).unwrap();
        assert_eq!(json, "50.0");

        let roundtrip: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, roundtrip);
    }
}
