//! Dimensional algebra
//!
//! A closed table of named physical relationships (length × length = area,
//! speed × time = length, ...). Each rule fixes the pivot unit every operand
//! is converted to and the unit the result is tagged with. Nothing is derived
//! from base-dimension exponents: a pairing missing from [`RULES`] is
//! unsupported.
//!
//! Multiplication rules are stored in one orientation. A multiply that misses
//! is retried once with the operands swapped; division never is.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::convert::convert;
use crate::units::*;
use crate::{AnyUnit, ConversionError, Dimension, Measurement};

/// Cross-dimension arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    fn combine(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Multiply => write!(f, "×"),
            Operator::Divide => write!(f, "÷"),
        }
    }
}

/// One entry of the dimensional operation table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionalRule {
    pub lhs: Dimension,
    pub op: Operator,
    pub rhs: Dimension,
    pub result: Dimension,
    /// Unit the left operand is converted to before combining
    pub lhs_pivot: AnyUnit,
    /// Unit the right operand is converted to before combining
    pub rhs_pivot: AnyUnit,
    /// Unit the combined value is expressed in
    pub result_unit: AnyUnit,
}

impl DimensionalRule {
    /// Check if this rule covers `(lhs op rhs)` in exactly that order
    pub fn matches(&self, lhs: Dimension, op: Operator, rhs: Dimension) -> bool {
        self.lhs == lhs && self.op == op && self.rhs == rhs
    }

    /// Apply this rule to two measurements given in the rule's order
    pub fn evaluate(&self, lhs: &Measurement, rhs: &Measurement) -> Result<Measurement, ConversionError> {
        let a = convert(lhs.value, lhs.unit, self.lhs_pivot)?;
        let b = convert(rhs.value, rhs.unit, self.rhs_pivot)?;
        Ok(Measurement::new(self.op.combine(a, b), self.result_unit))
    }
}

impl fmt::Display for DimensionalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

/// `rule!(Lhs Op Rhs => Result: lhs_pivot, rhs_pivot => result_unit)`
macro_rules! rule {
    ($lhs:ident $op:ident $rhs:ident => $result:ident: $lp:ident, $rp:ident => $ru:ident) => {
        DimensionalRule {
            lhs: Dimension::$lhs,
            op: Operator::$op,
            rhs: Dimension::$rhs,
            result: Dimension::$result,
            lhs_pivot: AnyUnit::$lhs($lhs::$lp),
            rhs_pivot: AnyUnit::$rhs($rhs::$rp),
            result_unit: AnyUnit::$result($result::$ru),
        }
    };
}

/// The dimensional operation table
pub static RULES: &[DimensionalRule] = &[
    // Geometry
    rule!(Length Multiply Length => Area: Meters, Meters => SquareMeters),
    rule!(Length Multiply Area => Volume: Meters, SquareMeters => CubicMeters),
    rule!(Area Divide Length => Length: SquareMeters, Meters => Meters),
    rule!(Volume Divide Length => Area: CubicMeters, Meters => SquareMeters),
    rule!(Volume Divide Area => Length: CubicMeters, SquareMeters => Meters),
    // Kinematics
    rule!(Length Divide Time => Speed: Meters, Seconds => MetersPerSecond),
    rule!(Length Divide Speed => Time: Meters, MetersPerSecond => Seconds),
    rule!(Speed Multiply Time => Length: MetersPerSecond, Seconds => Meters),
    rule!(Speed Divide Time => Acceleration: MetersPerSecond, Seconds => MetersPerSecondSquared),
    rule!(Speed Divide Acceleration => Time: MetersPerSecond, MetersPerSecondSquared => Seconds),
    rule!(Acceleration Multiply Time => Speed: MetersPerSecondSquared, Seconds => MetersPerSecond),
    // Concentration
    rule!(Mass Divide Volume => Concentration: Grams, Liters => GramsPerLiter),
    rule!(Mass Divide Concentration => Volume: Grams, GramsPerLiter => Liters),
    rule!(Concentration Multiply Volume => Mass: GramsPerLiter, Liters => Grams),
    // Energy and power
    rule!(Energy Divide Time => Power: Joules, Seconds => Watts),
    rule!(Energy Divide Power => Time: Joules, Watts => Seconds),
    rule!(Power Multiply Time => Energy: Watts, Seconds => Joules),
    // Electricity
    rule!(ElectricCurrent Multiply ElectricPotential => Power: Amperes, Volts => Watts),
    rule!(Power Divide ElectricCurrent => ElectricPotential: Watts, Amperes => Volts),
    rule!(Power Divide ElectricPotential => ElectricCurrent: Watts, Volts => Amperes),
    rule!(ElectricPotential Divide ElectricCurrent => ElectricResistance: Volts, Amperes => Ohms),
    rule!(ElectricPotential Divide ElectricResistance => ElectricCurrent: Volts, Ohms => Amperes),
    rule!(ElectricCurrent Multiply ElectricResistance => ElectricPotential: Amperes, Ohms => Volts),
    rule!(Energy Divide ElectricPotential => ElectricChargeCapacity: Joules, Volts => Coulombs),
    rule!(Energy Divide ElectricChargeCapacity => ElectricPotential: Joules, Coulombs => Volts),
    rule!(ElectricChargeCapacity Multiply ElectricPotential => Energy: Coulombs, Volts => Joules),
    rule!(ElectricCurrent Multiply Time => ElectricChargeCapacity: Amperes, Seconds => Coulombs),
    rule!(ElectricChargeCapacity Divide Time => ElectricCurrent: Coulombs, Seconds => Amperes),
    rule!(ElectricChargeCapacity Divide ElectricCurrent => Time: Coulombs, Amperes => Seconds),
    // Rotation
    rule!(Angle Divide Time => AngularVelocity: Radians, Seconds => RadiansPerSecond),
    rule!(Angle Divide AngularVelocity => Time: Radians, RadiansPerSecond => Seconds),
    rule!(AngularVelocity Multiply Time => Angle: RadiansPerSecond, Seconds => Radians),
];

/// The whole operation table
pub fn rules() -> &'static [DimensionalRule] {
    RULES
}

/// Direct table lookup, no commutative retry
pub fn resolve(lhs: Dimension, op: Operator, rhs: Dimension) -> Option<&'static DimensionalRule> {
    RULES.iter().find(|rule| rule.matches(lhs, op, rhs))
}

/// A rule found for a requested operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rule: &'static DimensionalRule,
    /// The rule matched with the operands swapped
    pub commuted: bool,
}

/// Look up `(lhs op rhs)`, retrying a multiply once with swapped operands
pub fn lookup(lhs: Dimension, op: Operator, rhs: Dimension) -> Option<Resolution> {
    lookup_with(lhs, op, rhs, false)
}

fn lookup_with(lhs: Dimension, op: Operator, rhs: Dimension, commuted: bool) -> Option<Resolution> {
    if let Some(rule) = resolve(lhs, op, rhs) {
        return Some(Resolution { rule, commuted });
    }
    if op == Operator::Multiply && !commuted {
        trace!(%lhs, %rhs, "no direct multiply rule, retrying commuted");
        return lookup_with(rhs, op, lhs, true);
    }
    None
}

/// Evaluate `lhs op rhs` through the operation table
pub fn apply(lhs: &Measurement, op: Operator, rhs: &Measurement) -> Result<Measurement, ConversionError> {
    match lookup(lhs.dimension(), op, rhs.dimension()) {
        Some(Resolution { rule, commuted: false }) => rule.evaluate(lhs, rhs),
        Some(Resolution { rule, commuted: true }) => rule.evaluate(rhs, lhs),
        None => {
            debug!(lhs = %lhs.dimension(), ?op, rhs = %rhs.dimension(), "no dimensional rule");
            Err(ConversionError::UnsupportedOperation {
                lhs: lhs.dimension(),
                op,
                rhs: rhs.dimension(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn m(value: f64, unit: impl Into<AnyUnit>) -> Measurement {
        Measurement::new(value, unit.into())
    }

    #[test]
    fn test_rules_are_consistent() {
        for rule in RULES {
            assert_eq!(rule.lhs_pivot.dimension(), rule.lhs, "{}", rule);
            assert_eq!(rule.rhs_pivot.dimension(), rule.rhs, "{}", rule);
            assert_eq!(rule.result_unit.dimension(), rule.result, "{}", rule);
        }
    }

    #[test]
    fn test_rules_are_unique() {
        let mut seen = HashSet::new();
        for rule in RULES {
            assert!(seen.insert((rule.lhs, rule.op, rule.rhs)), "duplicate rule {}", rule);
        }
    }

    #[test]
    fn test_multiply_rules_stored_once() {
        for rule in RULES.iter().filter(|r| r.op == Operator::Multiply && r.lhs != r.rhs) {
            assert!(
                resolve(rule.rhs, Operator::Multiply, rule.lhs).is_none(),
                "commuted duplicate of {}",
                rule
            );
        }
    }

    #[test]
    fn test_length_times_length() {
        let area = apply(&m(10.0, Length::Meters), Operator::Multiply, &m(2.0, Length::Meters)).unwrap();
        assert_eq!(area, m(20.0, Area::SquareMeters));
    }

    #[test]
    fn test_kilometers_pivot_to_meters() {
        let area = apply(&m(1.0, Length::Kilometers), Operator::Multiply, &m(1.0, Length::Kilometers)).unwrap();
        assert_eq!(area.unit, AnyUnit::Area(Area::SquareMeters));
        assert_eq!(area.value, 1e6);
    }

    #[test]
    fn test_speed_times_time() {
        let distance = apply(&m(100.0, Speed::Knots), Operator::Multiply, &m(1.0, Time::Hours)).unwrap();
        assert_eq!(distance.unit, AnyUnit::Length(Length::Meters));
        let km = distance.converted_to(Length::Kilometers.into()).unwrap();
        assert_relative_eq!(km.value, 185.2, max_relative = 1e-9);
    }

    #[test]
    fn test_commutative_retry() {
        let speed = m(20.0, Speed::MetersPerSecond);
        let time = m(3.0, Time::Minutes);
        let forward = apply(&speed, Operator::Multiply, &time).unwrap();
        let backward = apply(&time, Operator::Multiply, &speed).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward, m(3600.0, Length::Meters));

        let resolution = lookup(Dimension::Time, Operator::Multiply, Dimension::Speed).unwrap();
        assert!(resolution.commuted);
    }

    #[test]
    fn test_divide_never_commutes() {
        // Length / Time exists, Time / Length does not
        let result = apply(&m(10.0, Time::Seconds), Operator::Divide, &m(100.0, Length::Meters));
        assert_eq!(
            result,
            Err(ConversionError::UnsupportedOperation {
                lhs: Dimension::Time,
                op: Operator::Divide,
                rhs: Dimension::Length,
            })
        );
        assert!(lookup(Dimension::Time, Operator::Divide, Dimension::Length).is_none());
    }

    #[test]
    fn test_unsupported_pairing() {
        let result = apply(&m(2.0, Mass::Kilograms), Operator::Multiply, &m(3.0, Mass::Kilograms));
        assert_eq!(
            result,
            Err(ConversionError::UnsupportedOperation {
                lhs: Dimension::Mass,
                op: Operator::Multiply,
                rhs: Dimension::Mass,
            })
        );
    }

    #[test]
    fn test_mass_over_volume() {
        let c = apply(&m(1.0, Mass::Kilograms), Operator::Divide, &m(2.0, Volume::Liters)).unwrap();
        assert_eq!(c, m(500.0, Concentration::GramsPerLiter));
    }

    #[test]
    fn test_ohms_law() {
        let r = apply(&m(12.0, ElectricPotential::Volts), Operator::Divide, &m(500.0, ElectricCurrent::Milliamperes))
            .unwrap();
        assert_relative_eq!(r.value, 24.0);
        assert_eq!(r.unit, AnyUnit::ElectricResistance(ElectricResistance::Ohms));

        let v = apply(&m(24.0, ElectricResistance::Ohms), Operator::Multiply, &m(0.5, ElectricCurrent::Amperes)).unwrap();
        assert_eq!(v, m(12.0, ElectricPotential::Volts));
    }

    #[test]
    fn test_battery_energy() {
        let energy = apply(
            &m(2.0, ElectricChargeCapacity::AmpereHours),
            Operator::Multiply,
            &m(3.7, ElectricPotential::Volts),
        )
        .unwrap();
        let wh = energy.converted_to(Energy::WattHours.into()).unwrap();
        assert_relative_eq!(wh.value, 7.4, max_relative = 1e-12);
    }

    #[test]
    fn test_angle_over_time() {
        let w = apply(&m(360.0, Angle::Degrees), Operator::Divide, &m(1.0, Time::Seconds)).unwrap();
        assert_relative_eq!(w.value, 2.0 * std::f64::consts::PI, max_relative = 1e-12);
        assert_eq!(w.unit, AnyUnit::AngularVelocity(AngularVelocity::RadiansPerSecond));
    }

    #[test]
    fn test_rule_display() {
        let rule = resolve(Dimension::Speed, Operator::Multiply, Dimension::Time).unwrap();
        assert_eq!(rule.to_string(), "speed × time = length");
    }
}
