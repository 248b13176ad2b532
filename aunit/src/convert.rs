//! Conversion engine
//!
//! Converts values between units of one dimension using each unit's
//! [`UnitDefinition`]. Cross-dimension requests are rejected with
//! [`ConversionError::IncompatibleDimensions`].

use tracing::debug;

use crate::unit::Scale;
use crate::{AnyUnit, ConversionError, Dimension, Measurement, UnitDefinition};

/// Convert `value` expressed in `from` into `to`.
///
/// Converting a unit to itself returns `value` unchanged.
pub fn convert(value: f64, from: AnyUnit, to: AnyUnit) -> Result<f64, ConversionError> {
    let dimension = from.dimension();
    if dimension != to.dimension() {
        debug!(from = %from.identifier(), to = %to.identifier(), "rejected cross-dimension conversion");
        return Err(ConversionError::incompatible(dimension, to.dimension()));
    }
    if from == to {
        return Ok(value);
    }
    Ok(convert_definitions(value, dimension, from.definition(), to.definition()))
}

/// Express `value` in `unit`'s base unit
pub fn to_base(value: f64, unit: AnyUnit) -> Measurement {
    Measurement::new(unit.to_base_value(value), unit.dimension().base_unit())
}

/// Express a base-unit `value` in `unit`
pub fn from_base(value: f64, unit: AnyUnit) -> f64 {
    unit.from_base_value(value)
}

/// Convert between two definitions already known to share `dimension`
pub(crate) fn convert_definitions(
    value: f64,
    dimension: Dimension,
    from: UnitDefinition,
    to: UnitDefinition,
) -> f64 {
    match dimension {
        // Constants are in source-unit degrees: add before scaling in,
        // subtract after scaling out.
        Dimension::Temperature => {
            let kelvin = (value + from.constant) * from.coefficient;
            kelvin / to.coefficient - to.constant
        }
        Dimension::TemperatureDifference => value * from.coefficient / to.coefficient,
        _ => match (from.scale, to.scale) {
            (Scale::Linear, Scale::Linear) => value * from.coefficient / to.coefficient,
            _ => to.from_base_value(from.to_base_value(value)),
        },
    }
}
