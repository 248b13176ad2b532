//! Measurement - a value tagged with a unit of any dimension
//!
//! The dynamic counterpart of [`crate::Quantity`]: the unit is an
//! [`AnyUnit`], so dimension mismatches surface as `Err` at runtime instead of
//! at compile time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra::{self, Operator};
use crate::convert::{convert, to_base};
use crate::{AnyUnit, ConversionError, Dimension, Unit};

/// A numeric value with a unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: AnyUnit,
}

#[derive(Clone, Copy)]
enum Additive {
    Add,
    Subtract,
}

impl Measurement {
    pub fn new(value: f64, unit: AnyUnit) -> Self {
        Measurement { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Express this measurement in `target`
    pub fn converted_to(&self, target: AnyUnit) -> Result<Measurement, ConversionError> {
        let value = convert(self.value, self.unit, target)?;
        Ok(Measurement::new(value, target))
    }

    /// Convert in place. Left untouched on error.
    pub fn convert_self(&mut self, target: AnyUnit) -> Result<(), ConversionError> {
        *self = self.converted_to(target)?;
        Ok(())
    }

    /// Express this measurement in its dimension's base unit
    pub fn to_base(&self) -> Measurement {
        to_base(self.value, self.unit)
    }

    /// Sum in self's unit.
    ///
    /// Besides same-dimension operands, a temperature difference may be added
    /// to an absolute temperature (in either order); the result is in the
    /// temperature's unit.
    pub fn add(&self, other: &Measurement) -> Result<Measurement, ConversionError> {
        self.additive(other, Additive::Add)
    }

    /// Difference in self's unit. A temperature difference may be subtracted
    /// from a temperature, but not the other way around.
    pub fn subtract(&self, other: &Measurement) -> Result<Measurement, ConversionError> {
        self.additive(other, Additive::Subtract)
    }

    fn additive(&self, other: &Measurement, op: Additive) -> Result<Measurement, ConversionError> {
        let combine = |a: f64, b: f64| match op {
            Additive::Add => a + b,
            Additive::Subtract => a - b,
        };
        match (self.unit, other.unit, op) {
            (AnyUnit::Temperature(t), AnyUnit::TemperatureDifference(d), _) => {
                let delta = d.convert_value(other.value, t.difference_unit());
                Ok(Measurement::new(combine(self.value, delta), self.unit))
            }
            (AnyUnit::TemperatureDifference(d), AnyUnit::Temperature(t), Additive::Add) => {
                let delta = d.convert_value(self.value, t.difference_unit());
                Ok(Measurement::new(other.value + delta, other.unit))
            }
            _ => {
                let value = convert(other.value, other.unit, self.unit)?;
                Ok(Measurement::new(combine(self.value, value), self.unit))
            }
        }
    }

    /// Product through the dimensional operation table
    pub fn multiply(&self, other: &Measurement) -> Result<Measurement, ConversionError> {
        algebra::apply(self, Operator::Multiply, other)
    }

    /// Quotient through the dimensional operation table
    pub fn divide(&self, other: &Measurement) -> Result<Measurement, ConversionError> {
        algebra::apply(self, Operator::Divide, other)
    }

    pub fn multiply_scalar(&self, scalar: f64) -> Measurement {
        Measurement::new(self.value * scalar, self.unit)
    }

    pub fn divide_scalar(&self, scalar: f64) -> Measurement {
        Measurement::new(self.value / scalar, self.unit)
    }

    /// Semantic comparison: `other` is converted into self's unit first, so
    /// `1 km` and `1000 m` compare equal here even though `==` says otherwise.
    pub fn approx_eq(&self, other: &Measurement, relative_tolerance: f64) -> bool {
        match convert(other.value, other.unit, self.unit) {
            Ok(value) => relative_eq(self.value, value, relative_tolerance),
            Err(_) => false,
        }
    }
}

pub(crate) fn relative_eq(a: f64, b: f64, relative_tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= relative_tolerance * a.abs().max(b.abs())
}

/// Bit pattern used for hashing; -0.0 and 0.0 compare equal so they must
/// hash equally.
pub(crate) fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

impl Hash for Measurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.value).hash(state);
        self.unit.hash(state);
    }
}

impl<U: Unit> From<crate::Quantity<U>> for Measurement {
    fn from(quantity: crate::Quantity<U>) -> Self {
        Measurement::new(quantity.value, quantity.unit.into())
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for Measurement {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_quantity(s)
    }
}
