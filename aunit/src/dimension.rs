//! Physical dimensions (unit kinds)
//!
//! Each dimension is a closed category of mutually convertible units with one
//! designated base unit. Temperature and temperature difference are distinct
//! dimensions: the first is an absolute (affine) scale, the second a delta.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::units::*;
use crate::{AnyUnit, ConversionError, Unit};

/// A physical category of measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Length,
    Speed,
    Pressure,
    /// Absolute temperature
    Temperature,
    /// Temperature interval, no zero point
    TemperatureDifference,
    Mass,
    Volume,
    Acceleration,
    Power,
    Angle,
    AngularVelocity,
    Area,
    Concentration,
    Time,
    ElectricChargeCapacity,
    ElectricCurrent,
    ElectricPotential,
    ElectricResistance,
    Energy,
    Frequency,
    FuelEfficiency,
    /// Digital information
    Data,
}

impl Dimension {
    /// Every dimension, in declaration order
    pub const ALL: &'static [Dimension] = &[
        Dimension::Length,
        Dimension::Speed,
        Dimension::Pressure,
        Dimension::Temperature,
        Dimension::TemperatureDifference,
        Dimension::Mass,
        Dimension::Volume,
        Dimension::Acceleration,
        Dimension::Power,
        Dimension::Angle,
        Dimension::AngularVelocity,
        Dimension::Area,
        Dimension::Concentration,
        Dimension::Time,
        Dimension::ElectricChargeCapacity,
        Dimension::ElectricCurrent,
        Dimension::ElectricPotential,
        Dimension::ElectricResistance,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::FuelEfficiency,
        Dimension::Data,
    ];

    /// The designated base unit (coefficient 1, constant 0)
    pub fn base_unit(self) -> AnyUnit {
        match self {
            Dimension::Length => Length::BASE.into(),
            Dimension::Speed => Speed::BASE.into(),
            Dimension::Pressure => Pressure::BASE.into(),
            Dimension::Temperature => Temperature::BASE.into(),
            Dimension::TemperatureDifference => TemperatureDifference::BASE.into(),
            Dimension::Mass => Mass::BASE.into(),
            Dimension::Volume => Volume::BASE.into(),
            Dimension::Acceleration => Acceleration::BASE.into(),
            Dimension::Power => Power::BASE.into(),
            Dimension::Angle => Angle::BASE.into(),
            Dimension::AngularVelocity => AngularVelocity::BASE.into(),
            Dimension::Area => Area::BASE.into(),
            Dimension::Concentration => Concentration::BASE.into(),
            Dimension::Time => Time::BASE.into(),
            Dimension::ElectricChargeCapacity => ElectricChargeCapacity::BASE.into(),
            Dimension::ElectricCurrent => ElectricCurrent::BASE.into(),
            Dimension::ElectricPotential => ElectricPotential::BASE.into(),
            Dimension::ElectricResistance => ElectricResistance::BASE.into(),
            Dimension::Energy => Energy::BASE.into(),
            Dimension::Frequency => Frequency::BASE.into(),
            Dimension::FuelEfficiency => FuelEfficiency::BASE.into(),
            Dimension::Data => Data::BASE.into(),
        }
    }

    /// All units of this dimension, base unit first
    pub fn units(self) -> &'static [AnyUnit] {
        match self {
            Dimension::Length => Length::UNITS,
            Dimension::Speed => Speed::UNITS,
            Dimension::Pressure => Pressure::UNITS,
            Dimension::Temperature => Temperature::UNITS,
            Dimension::TemperatureDifference => TemperatureDifference::UNITS,
            Dimension::Mass => Mass::UNITS,
            Dimension::Volume => Volume::UNITS,
            Dimension::Acceleration => Acceleration::UNITS,
            Dimension::Power => Power::UNITS,
            Dimension::Angle => Angle::UNITS,
            Dimension::AngularVelocity => AngularVelocity::UNITS,
            Dimension::Area => Area::UNITS,
            Dimension::Concentration => Concentration::UNITS,
            Dimension::Time => Time::UNITS,
            Dimension::ElectricChargeCapacity => ElectricChargeCapacity::UNITS,
            Dimension::ElectricCurrent => ElectricCurrent::UNITS,
            Dimension::ElectricPotential => ElectricPotential::UNITS,
            Dimension::ElectricResistance => ElectricResistance::UNITS,
            Dimension::Energy => Energy::UNITS,
            Dimension::Frequency => Frequency::UNITS,
            Dimension::FuelEfficiency => FuelEfficiency::UNITS,
            Dimension::Data => Data::UNITS,
        }
    }

    /// Stable camelCase identifier, also used by serde
    pub fn identifier(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Speed => "speed",
            Dimension::Pressure => "pressure",
            Dimension::Temperature => "temperature",
            Dimension::TemperatureDifference => "temperatureDifference",
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Acceleration => "acceleration",
            Dimension::Power => "power",
            Dimension::Angle => "angle",
            Dimension::AngularVelocity => "angularVelocity",
            Dimension::Area => "area",
            Dimension::Concentration => "concentration",
            Dimension::Time => "time",
            Dimension::ElectricChargeCapacity => "electricChargeCapacity",
            Dimension::ElectricCurrent => "electricCurrent",
            Dimension::ElectricPotential => "electricPotential",
            Dimension::ElectricResistance => "electricResistance",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::FuelEfficiency => "fuelEfficiency",
            Dimension::Data => "data",
        }
    }

    /// Lowercase English name
    pub fn name(self) -> &'static str {
        match self {
            Dimension::TemperatureDifference => "temperature difference",
            Dimension::AngularVelocity => "angular velocity",
            Dimension::ElectricChargeCapacity => "electric charge",
            Dimension::ElectricCurrent => "electric current",
            Dimension::ElectricPotential => "electric potential",
            Dimension::ElectricResistance => "electric resistance",
            Dimension::FuelEfficiency => "fuel efficiency",
            other => other.identifier(),
        }
    }

    /// Check whether `unit` belongs to this dimension
    pub fn contains(self, unit: AnyUnit) -> bool {
        unit.dimension() == self
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.identifier().eq_ignore_ascii_case(s) || d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownDimension(s.to_string()))
    }
}
