//! Unit representation with conversion factors

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::units::*;
use crate::{ConversionError, Dimension};

/// How a unit's value maps onto its dimension's base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// base = value * coefficient
    Linear,
    /// base = (value + constant) * coefficient
    Affine,
    /// base = coefficient / value
    Reciprocal,
}

/// Conversion data of one concrete unit relative to its base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Multiplicative factor toward the base unit
    pub coefficient: f64,
    /// Additive offset in source-unit degrees; only absolute temperatures use it
    pub constant: f64,
    pub scale: Scale,
}

impl UnitDefinition {
    /// Proportional unit (no offset)
    pub const fn linear(coefficient: f64) -> Self {
        UnitDefinition { coefficient, constant: 0.0, scale: Scale::Linear }
    }

    /// Unit with an additive offset applied before the coefficient
    pub const fn affine(coefficient: f64, constant: f64) -> Self {
        UnitDefinition { coefficient, constant, scale: Scale::Affine }
    }

    /// Unit inversely proportional to the base unit (e.g. L/100km vs km/L)
    pub const fn reciprocal(coefficient: f64) -> Self {
        UnitDefinition { coefficient, constant: 0.0, scale: Scale::Reciprocal }
    }

    /// Check if this is the identity definition
    pub fn is_identity(&self) -> bool {
        self.scale != Scale::Reciprocal && self.coefficient == 1.0 && self.constant == 0.0
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base_value(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear => value * self.coefficient,
            Scale::Affine => (value + self.constant) * self.coefficient,
            Scale::Reciprocal => self.coefficient / value,
        }
    }

    /// Convert a base-unit value into this unit
    pub fn from_base_value(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear => value / self.coefficient,
            Scale::Affine => value / self.coefficient - self.constant,
            Scale::Reciprocal => self.coefficient / value,
        }
    }
}

/// A concrete unit of one fixed dimension.
///
/// Implemented by the per-dimension enums in [`crate::units`]. Because the
/// dimension is an associated constant, `Quantity<U>` arithmetic between
/// different dimensions does not type-check.
pub trait Unit:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + Into<AnyUnit>
    + TryFrom<AnyUnit, Error = ConversionError>
    + Send
    + Sync
    + 'static
{
    /// The dimension every variant belongs to
    const DIMENSION: Dimension;
    /// The dimension's base unit
    const BASE: Self;
    /// Every variant, base unit first
    const ALL: &'static [Self];

    fn definition(self) -> UnitDefinition;

    /// Stable identifier (e.g. `"kilometersPerHour"`)
    fn identifier(self) -> &'static str;

    /// Short symbol (e.g. `"km/h"`)
    fn symbol(self) -> &'static str;

    fn coefficient(self) -> f64 {
        self.definition().coefficient
    }

    fn constant(self) -> f64 {
        self.definition().constant
    }

    fn is_base(self) -> bool {
        self == Self::BASE
    }

    fn to_base_value(self, value: f64) -> f64 {
        self.definition().to_base_value(value)
    }

    fn from_base_value(self, value: f64) -> f64 {
        self.definition().from_base_value(value)
    }

    /// Convert `value` from this unit to `target`. Never fails: both units
    /// share the dimension.
    fn convert_value(self, value: f64, target: Self) -> f64 {
        if self == target {
            return value;
        }
        crate::convert::convert_definitions(
            value,
            Self::DIMENSION,
            self.definition(),
            target.definition(),
        )
    }
}

/// Runs `$body` with `$unit` bound to the inner per-dimension unit.
macro_rules! each_unit {
    ($value:expr, $unit:ident => $body:expr) => {
        match $value {
            AnyUnit::Length($unit) => $body,
            AnyUnit::Speed($unit) => $body,
            AnyUnit::Pressure($unit) => $body,
            AnyUnit::Temperature($unit) => $body,
            AnyUnit::TemperatureDifference($unit) => $body,
            AnyUnit::Mass($unit) => $body,
            AnyUnit::Volume($unit) => $body,
            AnyUnit::Acceleration($unit) => $body,
            AnyUnit::Power($unit) => $body,
            AnyUnit::Angle($unit) => $body,
            AnyUnit::AngularVelocity($unit) => $body,
            AnyUnit::Area($unit) => $body,
            AnyUnit::Concentration($unit) => $body,
            AnyUnit::Time($unit) => $body,
            AnyUnit::ElectricChargeCapacity($unit) => $body,
            AnyUnit::ElectricCurrent($unit) => $body,
            AnyUnit::ElectricPotential($unit) => $body,
            AnyUnit::ElectricResistance($unit) => $body,
            AnyUnit::Energy($unit) => $body,
            AnyUnit::Frequency($unit) => $body,
            AnyUnit::FuelEfficiency($unit) => $body,
            AnyUnit::Data($unit) => $body,
        }
    };
}

/// Any concrete unit, tagged by its dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyUnit {
    Length(Length),
    Speed(Speed),
    Pressure(Pressure),
    Temperature(Temperature),
    TemperatureDifference(TemperatureDifference),
    Mass(Mass),
    Volume(Volume),
    Acceleration(Acceleration),
    Power(Power),
    Angle(Angle),
    AngularVelocity(AngularVelocity),
    Area(Area),
    Concentration(Concentration),
    Time(Time),
    ElectricChargeCapacity(ElectricChargeCapacity),
    ElectricCurrent(ElectricCurrent),
    ElectricPotential(ElectricPotential),
    ElectricResistance(ElectricResistance),
    Energy(Energy),
    Frequency(Frequency),
    FuelEfficiency(FuelEfficiency),
    Data(Data),
}

impl AnyUnit {
    /// Every unit of every dimension
    pub fn all() -> impl Iterator<Item = AnyUnit> {
        Dimension::ALL.iter().flat_map(|d| d.units().iter().copied())
    }

    pub fn dimension(self) -> Dimension {
        each_unit!(self, u => unit_dimension(u))
    }

    pub fn definition(self) -> UnitDefinition {
        each_unit!(self, u => u.definition())
    }

    pub fn identifier(self) -> &'static str {
        each_unit!(self, u => u.identifier())
    }

    pub fn symbol(self) -> &'static str {
        each_unit!(self, u => u.symbol())
    }

    pub fn coefficient(self) -> f64 {
        self.definition().coefficient
    }

    pub fn constant(self) -> f64 {
        self.definition().constant
    }

    /// Check if this is its dimension's base unit
    pub fn is_base(self) -> bool {
        self.dimension().base_unit() == self
    }

    /// Check if two units can be converted into one another
    pub fn is_compatible(self, other: AnyUnit) -> bool {
        self.dimension() == other.dimension()
    }

    pub fn to_base_value(self, value: f64) -> f64 {
        self.definition().to_base_value(value)
    }

    pub fn from_base_value(self, value: f64) -> f64 {
        self.definition().from_base_value(value)
    }
}

fn unit_dimension<U: Unit>(_: U) -> Dimension {
    U::DIMENSION
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for AnyUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_unit(s)
    }
}

impl Serialize for AnyUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for AnyUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        AnyUnit::all()
            .find(|u| u.identifier() == identifier)
            .ok_or_else(|| de::Error::custom(format!("unknown unit: {}", identifier)))
    }
}
