//! # Equation Registry
//!
//! Metadata for every stage of the brake calculation, in evaluation order.
//! Front ends use it to print a "show your working" breakdown next to the
//! numbers produced by [`crate::calculations::calculate_breakdown`].
//!
//! ## Usage
//!
//! ```rust
//! use brake_core::equations::registry::Equation;
//!
//! let meta = Equation::StoppingDistance.metadata();
//! assert_eq!(meta.formula_plain, "s = v^2 / (2a)");
//! assert_eq!(Equation::ALL.first(), Some(&Equation::PistonArea));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Equation Categories
// ============================================================================

/// Physical stage an equation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Line pressure to pad forces
    Hydraulics,
    /// Pad forces to wheel torque
    Torque,
    /// Torque to vehicle deceleration
    Dynamics,
    /// Deceleration to stopping metrics
    Kinematics,
}

impl EquationCategory {
    /// All categories in evaluation order
    pub const ALL: [EquationCategory; 4] = [
        EquationCategory::Hydraulics,
        EquationCategory::Torque,
        EquationCategory::Dynamics,
        EquationCategory::Kinematics,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Hydraulics => "Hydraulics",
            EquationCategory::Torque => "Torque",
            EquationCategory::Dynamics => "Vehicle Dynamics",
            EquationCategory::Kinematics => "Kinematics",
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Display metadata for one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Clamping Force")
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Unit of the equation's result
    pub result_units: &'static str,
    /// Category for grouping
    pub category: EquationCategory,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation in the brake calculation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// A = π(d/2000)²
    PistonArea,
    /// F_c = p·1000·A
    ClampingForce,
    /// F_f = F_c·μ
    FrictionForce,
    /// T_w = F_f·(r_e/1000)·MA
    TorquePerWheel,
    /// T = 4·T_w
    TotalBrakingTorque,
    /// F_b = T/(r_t/1000)
    BrakingForce,
    /// a = F_b/m
    Deceleration,
    /// v = v_kmh/3.6
    InitialSpeed,
    /// s = v²/(2a)
    StoppingDistance,
    /// t = v/a
    StoppingTime,
}

impl Equation {
    /// All equations in evaluation order
    pub const ALL: [Equation; 10] = [
        Equation::PistonArea,
        Equation::ClampingForce,
        Equation::FrictionForce,
        Equation::TorquePerWheel,
        Equation::TotalBrakingTorque,
        Equation::BrakingForce,
        Equation::Deceleration,
        Equation::InitialSpeed,
        Equation::StoppingDistance,
        Equation::StoppingTime,
    ];

    /// Get the display metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PistonArea => EquationMetadata {
                name: "Piston Area",
                formula_plain: "A = pi * (d_p / 2000)^2",
                result_units: "m²",
                category: EquationCategory::Hydraulics,
            },
            Equation::ClampingForce => EquationMetadata {
                name: "Clamping Force",
                formula_plain: "F_c = p * 1000 * A",
                result_units: "N",
                category: EquationCategory::Hydraulics,
            },
            Equation::FrictionForce => EquationMetadata {
                name: "Friction Force",
                formula_plain: "F_f = F_c * mu",
                result_units: "N",
                category: EquationCategory::Hydraulics,
            },
            Equation::TorquePerWheel => EquationMetadata {
                name: "Torque per Wheel",
                formula_plain: "T_w = F_f * (r_e / 1000) * MA",
                result_units: "Nm",
                category: EquationCategory::Torque,
            },
            Equation::TotalBrakingTorque => EquationMetadata {
                name: "Total Braking Torque",
                formula_plain: "T = 4 * T_w",
                result_units: "Nm",
                category: EquationCategory::Torque,
            },
            Equation::BrakingForce => EquationMetadata {
                name: "Braking Force",
                formula_plain: "F_b = T / (r_t / 1000)",
                result_units: "N",
                category: EquationCategory::Dynamics,
            },
            Equation::Deceleration => EquationMetadata {
                name: "Deceleration",
                formula_plain: "a = F_b / m",
                result_units: "m/s²",
                category: EquationCategory::Dynamics,
            },
            Equation::InitialSpeed => EquationMetadata {
                name: "Initial Speed",
                formula_plain: "v = v_kmh / 3.6",
                result_units: "m/s",
                category: EquationCategory::Kinematics,
            },
            Equation::StoppingDistance => EquationMetadata {
                name: "Stopping Distance",
                formula_plain: "s = v^2 / (2a)",
                result_units: "m",
                category: EquationCategory::Kinematics,
            },
            Equation::StoppingTime => EquationMetadata {
                name: "Stopping Time",
                formula_plain: "t = v / a",
                result_units: "s",
                category: EquationCategory::Kinematics,
            },
        }
    }

    /// Get all equations in a given category, in evaluation order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        Equation::ALL
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}
