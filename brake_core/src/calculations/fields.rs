//! # Input Field Catalog
//!
//! Metadata for each [`VehicleInputs`] field: display label, unit, the
//! increment an input widget should step by, and the form group it belongs
//! to. Front ends iterate [`InputField::ALL`] to build forms or prompts
//! without hard-coding the field list.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::calculations::{InputField, VehicleInputs};
//!
//! let field = InputField::from_key("friction_coefficient").unwrap();
//! assert_eq!(field.label(), "Friction Coefficient");
//!
//! let updated = VehicleInputs::default().with(field, 0.6);
//! assert_eq!(updated.get(field), 0.6);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::braking::VehicleInputs;
use crate::errors::{CalcError, CalcResult};

/// Form section a field is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    /// Mass, tire, speed and target distance
    VehicleParameters,
    /// Hydraulics, caliper and rotor
    BrakeSystem,
}

impl FieldGroup {
    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            FieldGroup::VehicleParameters => "Vehicle Parameters",
            FieldGroup::BrakeSystem => "Brake System",
        }
    }
}

/// One editable field of [`VehicleInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    VehicleMass,
    TireRadius,
    InitialSpeed,
    DesiredStoppingDistance,
    BrakeLinePressure,
    PistonDiameter,
    MechanicalAdvantage,
    FrictionCoefficient,
    EffectiveBrakeRadius,
}

impl InputField {
    /// All fields in form order (vehicle parameters first, then brake system)
    pub const ALL: [InputField; 9] = [
        InputField::VehicleMass,
        InputField::TireRadius,
        InputField::InitialSpeed,
        InputField::DesiredStoppingDistance,
        InputField::BrakeLinePressure,
        InputField::PistonDiameter,
        InputField::MechanicalAdvantage,
        InputField::FrictionCoefficient,
        InputField::EffectiveBrakeRadius,
    ];

    /// JSON key of the field in [`VehicleInputs`]
    pub fn key(&self) -> &'static str {
        match self {
            InputField::VehicleMass => "vehicle_mass_kg",
            InputField::TireRadius => "tire_radius_mm",
            InputField::InitialSpeed => "initial_speed_kmh",
            InputField::DesiredStoppingDistance => "desired_stopping_distance_m",
            InputField::BrakeLinePressure => "brake_line_pressure_bar",
            InputField::PistonDiameter => "piston_diameter_mm",
            InputField::MechanicalAdvantage => "mechanical_advantage",
            InputField::FrictionCoefficient => "friction_coefficient",
            InputField::EffectiveBrakeRadius => "effective_brake_radius_mm",
        }
    }

    /// Look a field up by its JSON key.
    pub fn from_key(key: &str) -> CalcResult<Self> {
        InputField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == key)
            .ok_or_else(|| CalcError::invalid_input("field", key, "Unknown input field"))
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::VehicleMass => "Vehicle Mass",
            InputField::TireRadius => "Tire Radius",
            InputField::InitialSpeed => "Initial Speed",
            InputField::DesiredStoppingDistance => "Desired Stopping Distance",
            InputField::BrakeLinePressure => "Brake Line Pressure",
            InputField::PistonDiameter => "Piston Diameter",
            InputField::MechanicalAdvantage => "Mechanical Advantage",
            InputField::FrictionCoefficient => "Friction Coefficient",
            InputField::EffectiveBrakeRadius => "Effective Brake Radius",
        }
    }

    /// Display unit; empty for dimensionless fields
    pub fn unit(&self) -> &'static str {
        match self {
            InputField::VehicleMass => "kg",
            InputField::TireRadius => "mm",
            InputField::InitialSpeed => "km/h",
            InputField::DesiredStoppingDistance => "m",
            InputField::BrakeLinePressure => "bar",
            InputField::PistonDiameter => "mm",
            InputField::MechanicalAdvantage | InputField::FrictionCoefficient => "",
            InputField::EffectiveBrakeRadius => "mm",
        }
    }

    /// Increment for spinner-style input widgets
    pub fn step(&self) -> f64 {
        match self {
            InputField::VehicleMass | InputField::TireRadius => 10.0,
            InputField::InitialSpeed | InputField::BrakeLinePressure | InputField::EffectiveBrakeRadius => 5.0,
            InputField::DesiredStoppingDistance | InputField::PistonDiameter => 1.0,
            InputField::MechanicalAdvantage => 0.1,
            InputField::FrictionCoefficient => 0.05,
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            InputField::VehicleMass
            | InputField::TireRadius
            | InputField::InitialSpeed
            | InputField::DesiredStoppingDistance => FieldGroup::VehicleParameters,
            _ => FieldGroup::BrakeSystem,
        }
    }

    /// Label with unit suffix, e.g. "Tire Radius (mm)"
    pub fn display_label(&self) -> String {
        match self.unit() {
            "" => self.label().to_string(),
            unit => format!("{} ({})", self.label(), unit),
        }
    }
}

impl VehicleInputs {
    /// Read one field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::VehicleMass => self.vehicle_mass_kg,
            InputField::TireRadius => self.tire_radius_mm,
            InputField::InitialSpeed => self.initial_speed_kmh,
            InputField::DesiredStoppingDistance => self.desired_stopping_distance_m,
            InputField::BrakeLinePressure => self.brake_line_pressure_bar,
            InputField::PistonDiameter => self.piston_diameter_mm,
            InputField::MechanicalAdvantage => self.mechanical_advantage,
            InputField::FrictionCoefficient => self.friction_coefficient,
            InputField::EffectiveBrakeRadius => self.effective_brake_radius_mm,
        }
    }

    /// Return a new record with one field replaced; `self` is left untouched.
    pub fn with(&self, field: InputField, value: f64) -> VehicleInputs {
        let mut next = *self;
        let slot = match field {
            InputField::VehicleMass => &mut next.vehicle_mass_kg,
            InputField::TireRadius => &mut next.tire_radius_mm,
            InputField::InitialSpeed => &mut next.initial_speed_kmh,
            InputField::DesiredStoppingDistance => &mut next.desired_stopping_distance_m,
            InputField::BrakeLinePressure => &mut next.brake_line_pressure_bar,
            InputField::PistonDiameter => &mut next.piston_diameter_mm,
            InputField::MechanicalAdvantage => &mut next.mechanical_advantage,
            InputField::FrictionCoefficient => &mut next.friction_coefficient,
            InputField::EffectiveBrakeRadius => &mut next.effective_brake_radius_mm,
        };
        *slot = value;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        let json = serde_json::to_value(VehicleInputs::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), InputField::ALL.len());
        for field in InputField::ALL {
            assert!(object.contains_key(field.key()), "missing key {}", field.key());
        }
    }

    #[test]
    fn test_from_key_roundtrip() {
        for field in InputField::ALL {
            assert_eq!(InputField::from_key(field.key()).unwrap(), field);
        }
    }

    #[test]
    fn test_from_key_unknown() {
        let err = InputField::from_key("wheel_count").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let original = VehicleInputs::default();
        let updated = original.with(InputField::VehicleMass, 400.0);
        assert_eq!(original.vehicle_mass_kg, 250.0);
        assert_eq!(updated.vehicle_mass_kg, 400.0);
        assert_eq!(updated.tire_radius_mm, original.tire_radius_mm);
    }

    #[test]
    fn test_get_matches_json_value() {
        let inputs = VehicleInputs::default();
        let json = serde_json::to_value(inputs).unwrap();
        for field in InputField::ALL {
            assert_eq!(json[field.key()].as_f64(), Some(inputs.get(field)));
        }
    }

    #[test]
    fn test_groups_and_labels() {
        let vehicle: Vec<_> = InputField::ALL
            .iter()
            .filter(|f| f.group() == FieldGroup::VehicleParameters)
            .collect();
        assert_eq!(vehicle.len(), 4);
        assert_eq!(InputField::TireRadius.display_label(), "Tire Radius (mm)");
        assert_eq!(InputField::MechanicalAdvantage.display_label(), "Mechanical Advantage");
        assert_eq!(InputField::FrictionCoefficient.step(), 0.05);
    }
}
