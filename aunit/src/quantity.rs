//! Quantity type - a value with a unit of one statically known dimension

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::measurement::hash_bits;
use crate::units::{Temperature, TemperatureDifference};
use crate::{ConversionError, Dimension, Measurement, Unit};

/// A physical quantity: a numeric value with a unit of type `U`.
///
/// Additive arithmetic only compiles between quantities of the same unit
/// type. Cross-dimension products and quotients go through the dimensional
/// algebra and are fallible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<U> {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: U,
}

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Quantity { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// Erase the unit type
    pub fn measurement(&self) -> Measurement {
        Measurement::from(*self)
    }

    /// Express this quantity in `target`
    pub fn converted_to(&self, target: U) -> Quantity<U> {
        Quantity::new(self.unit.convert_value(self.value, target), target)
    }

    pub fn convert_self(&mut self, target: U) {
        *self = self.converted_to(target);
    }

    /// Express this quantity in `U::BASE`
    pub fn to_base(&self) -> Quantity<U> {
        self.converted_to(U::BASE)
    }

    /// Sum in self's unit
    pub fn add(&self, other: &Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value + other.in_unit(self.unit), self.unit)
    }

    /// Difference in self's unit
    pub fn subtract(&self, other: &Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value - other.in_unit(self.unit), self.unit)
    }

    /// Dimensionless ratio `self / other`
    pub fn ratio(&self, other: &Quantity<U>) -> f64 {
        self.value / other.in_unit(self.unit)
    }

    pub fn multiply_scalar(&self, scalar: f64) -> Quantity<U> {
        Quantity::new(self.value * scalar, self.unit)
    }

    pub fn divide_scalar(&self, scalar: f64) -> Quantity<U> {
        Quantity::new(self.value / scalar, self.unit)
    }

    /// Product through the dimensional operation table, typed as `R`.
    ///
    /// ```
    /// use aunit::{Area, Length, Quantity};
    ///
    /// let width = Quantity::new(10.0, Length::Meters);
    /// let depth = Quantity::new(2.0, Length::Meters);
    /// let floor: Quantity<Area> = width.multiply(&depth).unwrap();
    /// assert_eq!(floor, Quantity::new(20.0, Area::SquareMeters));
    /// ```
    pub fn multiply<V: Unit, R: Unit>(&self, other: &Quantity<V>) -> Result<Quantity<R>, ConversionError> {
        self.measurement().multiply(&other.measurement())?.try_into()
    }

    /// Quotient through the dimensional operation table, typed as `R`
    pub fn divide<V: Unit, R: Unit>(&self, other: &Quantity<V>) -> Result<Quantity<R>, ConversionError> {
        self.measurement().divide(&other.measurement())?.try_into()
    }

    fn in_unit(&self, unit: U) -> f64 {
        self.unit.convert_value(self.value, unit)
    }
}

impl Quantity<Temperature> {
    /// Shift this temperature by an interval; the result keeps this unit
    pub fn add_difference(&self, delta: &Quantity<TemperatureDifference>) -> Quantity<Temperature> {
        Quantity::new(self.value + delta.degrees_of(self.unit), self.unit)
    }

    pub fn subtract_difference(&self, delta: &Quantity<TemperatureDifference>) -> Quantity<Temperature> {
        Quantity::new(self.value - delta.degrees_of(self.unit), self.unit)
    }
}

impl Quantity<TemperatureDifference> {
    /// Shift `temperature` by this interval; the result is in the
    /// temperature's unit
    pub fn add_to_temperature(&self, temperature: &Quantity<Temperature>) -> Quantity<Temperature> {
        temperature.add_difference(self)
    }

    /// This interval counted in degrees of `scale`
    fn degrees_of(&self, scale: Temperature) -> f64 {
        self.unit.convert_value(self.value, scale.difference_unit())
    }
}

impl<U: Unit> TryFrom<Measurement> for Quantity<U> {
    type Error = ConversionError;

    fn try_from(measurement: Measurement) -> Result<Self, Self::Error> {
        let unit = U::try_from(measurement.unit)?;
        Ok(Quantity::new(measurement.value, unit))
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.value).hash(state);
        self.unit.hash(state);
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Quantity<U>;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity::add(&self, &rhs)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Quantity<U>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Add<Quantity<TemperatureDifference>> for Quantity<Temperature> {
    type Output = Quantity<Temperature>;

    fn add(self, rhs: Quantity<TemperatureDifference>) -> Self::Output {
        self.add_difference(&rhs)
    }
}

impl Sub<Quantity<TemperatureDifference>> for Quantity<Temperature> {
    type Output = Quantity<Temperature>;

    fn sub(self, rhs: Quantity<TemperatureDifference>) -> Self::Output {
        self.subtract_difference(&rhs)
    }
}

impl Add<Quantity<Temperature>> for Quantity<TemperatureDifference> {
    type Output = Quantity<Temperature>;

    fn add(self, rhs: Quantity<Temperature>) -> Self::Output {
        self.add_to_temperature(&rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Quantity<U>;

    fn neg(self) -> Self::Output {
        Quantity::new(-self.value, self.unit)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Quantity<U>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply_scalar(rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs.multiply_scalar(self)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Quantity<U>;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide_scalar(rhs)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_converted_to() {
        let q = Quantity::new(5.0, Length::Kilometers);
        assert_eq!(q.converted_to(Length::Meters), Quantity::new(5000.0, Length::Meters));
        assert_eq!(q.to_base(), Quantity::new(5000.0, Length::Meters));
        assert_eq!(q.dimension(), Dimension::Length);
    }

    #[test]
    fn test_convert_self() {
        let mut q = Quantity::new(1.0, Pressure::Bars);
        q.convert_self(Pressure::Kilopascals);
        assert_relative_eq!(q.value, 100.0, max_relative = 1e-12);
        assert_eq!(q.unit, Pressure::Kilopascals);
    }

    #[test]
    fn test_add_left_unit_wins() {
        let sum = Quantity::new(1.0, Length::Kilometers) + Quantity::new(500.0, Length::Meters);
        assert_eq!(sum, Quantity::new(1.5, Length::Kilometers));

        let diff = Quantity::new(2.0, Time::Hours) - Quantity::new(30.0, Time::Minutes);
        assert_eq!(diff, Quantity::new(1.5, Time::Hours));
    }

    #[test]
    fn test_scalar_operators() {
        let q = Quantity::new(3.0, Mass::Pounds);
        assert_eq!(q * 2.0, Quantity::new(6.0, Mass::Pounds));
        assert_eq!(2.0 * q, Quantity::new(6.0, Mass::Pounds));
        assert_eq!(q / 2.0, Quantity::new(1.5, Mass::Pounds));
        assert_eq!(-q, Quantity::new(-3.0, Mass::Pounds));
    }

    #[test]
    fn test_ratio() {
        let a = Quantity::new(1.0, Length::Kilometers);
        let b = Quantity::new(250.0, Length::Meters);
        assert_relative_eq!(a.ratio(&b), 4.0);
    }

    #[test]
    fn test_multiply_typed() {
        let speed = Quantity::new(100.0, Speed::Knots);
        let time = Quantity::new(1.0, Time::Hours);
        let distance: Quantity<Length> = speed.multiply(&time).unwrap();
        assert_relative_eq!(distance.converted_to(Length::Kilometers).value, 185.2, max_relative = 1e-9);

        let commuted: Quantity<Length> = time.multiply(&speed).unwrap();
        assert_eq!(commuted, distance);
    }

    #[test]
    fn test_divide_typed() {
        let energy = Quantity::new(1.0, Energy::KilowattHours);
        let time = Quantity::new(2.0, Time::Hours);
        let power: Quantity<Power> = energy.divide(&time).unwrap();
        assert_relative_eq!(power.value, 500.0, max_relative = 1e-12);
        assert_eq!(power.unit, Power::Watts);
    }

    #[test]
    fn test_multiply_wrong_result_type() {
        let a = Quantity::new(2.0, Length::Meters);
        let result: Result<Quantity<Volume>, _> = a.multiply(&a);
        assert_eq!(
            result,
            Err(ConversionError::IncompatibleDimensions {
                from: Dimension::Area,
                to: Dimension::Volume,
            })
        );
    }

    #[test]
    fn test_multiply_unsupported() {
        let mass = Quantity::new(2.0, Mass::Kilograms);
        let result: Result<Quantity<Mass>, _> = mass.multiply(&mass);
        assert!(matches!(result, Err(ConversionError::UnsupportedOperation { .. })));
    }

    #[test]
    fn test_temperature_difference() {
        let noon = Quantity::new(68.0, Temperature::Fahrenheit);
        let change = Quantity::new(10.0, TemperatureDifference::CelsiusDelta);

        let later = noon + change;
        assert_eq!(later.unit, Temperature::Fahrenheit);
        assert_relative_eq!(later.value, 86.0, max_relative = 1e-12);

        let earlier = noon - change;
        assert_relative_eq!(earlier.value, 50.0, max_relative = 1e-12);

        assert_eq!(change + noon, later);
    }

    #[test]
    fn test_measurement_round_trip() {
        let q = Quantity::new(7.0, Volume::Gallons);
        let m = q.measurement();
        assert_eq!(m.dimension(), Dimension::Volume);
        assert_eq!(Quantity::<Volume>::try_from(m), Ok(q));
        assert!(Quantity::<Length>::try_from(m).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(5.0, Length::Kilometers).to_string(), "5 km");
        assert_eq!(Quantity::new(21.5, Temperature::Celsius).to_string(), "21.5 °C");
    }

    #[test]
    fn test_serde() {
        let q = Quantity::new(5.0, Length::Kilometers);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":5.0,"unit":"kilometers"}"#);

        let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
