//! Unit string parsing - parse units like "km/h", quantities like "5 km" and
//! conversion specs like "km->mi"

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::units::*;
use crate::{AnyUnit, ConversionError, Measurement};

/// Extra spellings accepted on top of every unit's identifier and symbol
const ALIASES: &[(&str, AnyUnit)] = &[
    // Length
    ("meter", AnyUnit::Length(Length::Meters)),
    ("metre", AnyUnit::Length(Length::Meters)),
    ("metres", AnyUnit::Length(Length::Meters)),
    ("kilometer", AnyUnit::Length(Length::Kilometers)),
    ("kilometre", AnyUnit::Length(Length::Kilometers)),
    ("kilometres", AnyUnit::Length(Length::Kilometers)),
    ("centimeter", AnyUnit::Length(Length::Centimeters)),
    ("millimeter", AnyUnit::Length(Length::Millimeters)),
    ("um", AnyUnit::Length(Length::Micrometers)),
    ("foot", AnyUnit::Length(Length::Feet)),
    ("inch", AnyUnit::Length(Length::Inches)),
    ("yard", AnyUnit::Length(Length::Yards)),
    ("mile", AnyUnit::Length(Length::Miles)),
    ("nmi", AnyUnit::Length(Length::NauticalMiles)),
    ("AU", AnyUnit::Length(Length::AstronomicalUnits)),
    // Area
    ("m2", AnyUnit::Area(Area::SquareMeters)),
    ("m^2", AnyUnit::Area(Area::SquareMeters)),
    ("km2", AnyUnit::Area(Area::SquareKilometers)),
    ("km^2", AnyUnit::Area(Area::SquareKilometers)),
    ("ft2", AnyUnit::Area(Area::SquareFeet)),
    ("ft^2", AnyUnit::Area(Area::SquareFeet)),
    ("acre", AnyUnit::Area(Area::Acres)),
    // Volume
    ("l", AnyUnit::Volume(Volume::Liters)),
    ("liter", AnyUnit::Volume(Volume::Liters)),
    ("litre", AnyUnit::Volume(Volume::Liters)),
    ("litres", AnyUnit::Volume(Volume::Liters)),
    ("ml", AnyUnit::Volume(Volume::Milliliters)),
    ("cc", AnyUnit::Volume(Volume::CubicCentimeters)),
    ("m3", AnyUnit::Volume(Volume::CubicMeters)),
    ("m^3", AnyUnit::Volume(Volume::CubicMeters)),
    ("gallon", AnyUnit::Volume(Volume::Gallons)),
    // Mass
    ("kilogram", AnyUnit::Mass(Mass::Kilograms)),
    ("gram", AnyUnit::Mass(Mass::Grams)),
    ("ug", AnyUnit::Mass(Mass::Micrograms)),
    ("lbs", AnyUnit::Mass(Mass::Pounds)),
    ("pound", AnyUnit::Mass(Mass::Pounds)),
    ("ounce", AnyUnit::Mass(Mass::Ounces)),
    ("tonne", AnyUnit::Mass(Mass::MetricTons)),
    ("tonnes", AnyUnit::Mass(Mass::MetricTons)),
    // Time
    ("second", AnyUnit::Time(Time::Seconds)),
    ("sec", AnyUnit::Time(Time::Seconds)),
    ("us", AnyUnit::Time(Time::Microseconds)),
    ("minute", AnyUnit::Time(Time::Minutes)),
    ("hour", AnyUnit::Time(Time::Hours)),
    ("hr", AnyUnit::Time(Time::Hours)),
    ("day", AnyUnit::Time(Time::Days)),
    ("week", AnyUnit::Time(Time::Weeks)),
    ("year", AnyUnit::Time(Time::Years)),
    // Speed
    ("kph", AnyUnit::Speed(Speed::KilometersPerHour)),
    ("kmh", AnyUnit::Speed(Speed::KilometersPerHour)),
    ("mps", AnyUnit::Speed(Speed::MetersPerSecond)),
    ("mi/h", AnyUnit::Speed(Speed::MilesPerHour)),
    ("knot", AnyUnit::Speed(Speed::Knots)),
    ("kt", AnyUnit::Speed(Speed::Knots)),
    // Acceleration
    ("m/s^2", AnyUnit::Acceleration(Acceleration::MetersPerSecondSquared)),
    ("m/s2", AnyUnit::Acceleration(Acceleration::MetersPerSecondSquared)),
    ("g0", AnyUnit::Acceleration(Acceleration::Gravity)),
    // Temperature
    ("degC", AnyUnit::Temperature(Temperature::Celsius)),
    ("degF", AnyUnit::Temperature(Temperature::Fahrenheit)),
    ("degR", AnyUnit::Temperature(Temperature::Rankine)),
    ("℃", AnyUnit::Temperature(Temperature::Celsius)),
    ("℉", AnyUnit::Temperature(Temperature::Fahrenheit)),
    ("delta_degC", AnyUnit::TemperatureDifference(TemperatureDifference::CelsiusDelta)),
    ("delta_degF", AnyUnit::TemperatureDifference(TemperatureDifference::FahrenheitDelta)),
    // Pressure
    ("pascal", AnyUnit::Pressure(Pressure::NewtonsPerMetersSquared)),
    ("pascals", AnyUnit::Pressure(Pressure::NewtonsPerMetersSquared)),
    ("bar", AnyUnit::Pressure(Pressure::Bars)),
    // Angle
    ("deg", AnyUnit::Angle(Angle::Degrees)),
    ("degree", AnyUnit::Angle(Angle::Degrees)),
    ("radian", AnyUnit::Angle(Angle::Radians)),
    ("deg/s", AnyUnit::AngularVelocity(AngularVelocity::DegreesPerSecond)),
    // Electricity
    ("amp", AnyUnit::ElectricCurrent(ElectricCurrent::Amperes)),
    ("amps", AnyUnit::ElectricCurrent(ElectricCurrent::Amperes)),
    ("uA", AnyUnit::ElectricCurrent(ElectricCurrent::Microamperes)),
    ("volt", AnyUnit::ElectricPotential(ElectricPotential::Volts)),
    ("uV", AnyUnit::ElectricPotential(ElectricPotential::Microvolts)),
    ("ohm", AnyUnit::ElectricResistance(ElectricResistance::Ohms)),
    ("kohm", AnyUnit::ElectricResistance(ElectricResistance::Kiloohms)),
    ("Mohm", AnyUnit::ElectricResistance(ElectricResistance::Megaohms)),
    ("uAh", AnyUnit::ElectricChargeCapacity(ElectricChargeCapacity::MicroampereHours)),
    // Energy and power
    ("joule", AnyUnit::Energy(Energy::Joules)),
    ("Cal", AnyUnit::Energy(Energy::Kilocalories)),
    ("watt", AnyUnit::Power(Power::Watts)),
    ("uW", AnyUnit::Power(Power::Microwatts)),
    // Frequency
    ("uHz", AnyUnit::Frequency(Frequency::Microhertz)),
    // Fuel efficiency
    ("km/l", AnyUnit::FuelEfficiency(FuelEfficiency::KilometersPerLiter)),
    ("kmpl", AnyUnit::FuelEfficiency(FuelEfficiency::KilometersPerLiter)),
    ("l/100km", AnyUnit::FuelEfficiency(FuelEfficiency::LitersPer100Kilometers)),
    ("L/100 km", AnyUnit::FuelEfficiency(FuelEfficiency::LitersPer100Kilometers)),
    ("mpg US", AnyUnit::FuelEfficiency(FuelEfficiency::MilesPerGallon)),
    // Data
    ("byte", AnyUnit::Data(Data::Bytes)),
    ("b", AnyUnit::Data(Data::Bits)),
];

/// Identifier, symbol and alias index. Identifiers and symbols are inserted
/// first so an alias never shadows them.
static INDEX: LazyLock<HashMap<&'static str, AnyUnit>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for unit in AnyUnit::all() {
        index.entry(unit.identifier()).or_insert(unit);
    }
    for unit in AnyUnit::all() {
        index.entry(unit.symbol()).or_insert(unit);
    }
    for &(alias, unit) in ALIASES {
        index.entry(alias).or_insert(unit);
    }
    index
});

/// Parse a unit string into an [`AnyUnit`]
///
/// Supported forms:
/// - Identifier: "meters", "kilometersPerHour"
/// - Symbol: "m", "km/h", "°C" (case-sensitive, "Mm" is not "mm")
/// - Alias: "meter", "kph", "degC", "um"
/// - Identifier ignoring ASCII case: "Meters", "KILOGRAMS"
pub fn parse_unit(s: &str) -> Result<AnyUnit, ConversionError> {
    let s = s.trim();

    if let Some(unit) = INDEX.get(s) {
        return Ok(*unit);
    }

    // Greek small mu written for the micro sign
    if s.contains('\u{3bc}') {
        let normalized = s.replace('\u{3bc}', "\u{b5}");
        if let Some(unit) = INDEX.get(normalized.as_str()) {
            return Ok(*unit);
        }
    }

    AnyUnit::all()
        .find(|u| u.identifier().eq_ignore_ascii_case(s))
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// Parse a conversion specification like "kg->lb" or "degC→degF"
pub fn parse_conversion(s: &str) -> Result<(AnyUnit, AnyUnit), ConversionError> {
    let malformed = || {
        ConversionError::InvalidQuantity(format!("invalid conversion format: {}, expected 'unit1->unit2'", s))
    };

    let separator = ["->", "→", " to ", " in "]
        .into_iter()
        .find(|sep| s.contains(sep))
        .ok_or_else(malformed)?;

    match s.split(separator).collect::<Vec<_>>()[..] {
        [from, to] => Ok((parse_unit(from)?, parse_unit(to)?)),
        _ => Err(malformed()),
    }
}

/// Parse a quantity string like "5 m", "100kg" or "-3.5 °C"
pub fn parse_quantity(s: &str) -> Result<Measurement, ConversionError> {
    let s = s.trim();
    let split_pos = number_len(s);

    if split_pos == 0 {
        return Err(ConversionError::InvalidQuantity(format!("no number found in: {}", s)));
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value: f64 = num_str
        .parse()
        .map_err(|_| ConversionError::InvalidQuantity(format!("invalid number: {}", num_str)))?;

    if !value.is_finite() {
        return Err(ConversionError::InvalidQuantity(format!("number out of range: {}", num_str)));
    }

    if unit_str.is_empty() {
        return Err(ConversionError::InvalidQuantity(format!("missing unit in: {}", s)));
    }

    Ok(Measurement::new(value, parse_unit(unit_str)?))
}

/// Byte length of the leading number. An exponent marker only counts when a
/// digit (or sign) follows, so "5exabytes" splits after the "5".
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' => {}
            b'+' | b'-' if end == 0 => {}
            b'e' | b'E' if seen_digit => {
                let rest = &bytes[end + 1..];
                let exponent = match rest {
                    [b'+' | b'-', d, ..] if d.is_ascii_digit() => 2,
                    [d, ..] if d.is_ascii_digit() => 1,
                    _ => break,
                };
                end += exponent;
            }
            _ => break,
        }
        end += 1;
    }

    if seen_digit {
        end
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_unit() {
        assert_eq!(parse_unit("m"), Ok(AnyUnit::Length(Length::Meters)));
        assert_eq!(parse_unit("km/h"), Ok(AnyUnit::Speed(Speed::KilometersPerHour)));
        assert_eq!(parse_unit(" kg "), Ok(AnyUnit::Mass(Mass::Kilograms)));
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_unit("litersPer100Kilometers"), Ok(AnyUnit::FuelEfficiency(FuelEfficiency::LitersPer100Kilometers)));
        assert_eq!(parse_unit("Kilograms"), Ok(AnyUnit::Mass(Mass::Kilograms)));
        assert_eq!(parse_unit("FAHRENHEIT"), Ok(AnyUnit::Temperature(Temperature::Fahrenheit)));
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!(parse_unit("Mm"), Ok(AnyUnit::Length(Length::Megameters)));
        assert_eq!(parse_unit("mm"), Ok(AnyUnit::Length(Length::Millimeters)));
        assert_eq!(parse_unit("MAh"), Ok(AnyUnit::ElectricChargeCapacity(ElectricChargeCapacity::MegaampereHours)));
        assert_eq!(parse_unit("mAh"), Ok(AnyUnit::ElectricChargeCapacity(ElectricChargeCapacity::MilliampereHours)));
    }

    #[test]
    fn test_every_identifier_and_symbol_parses() {
        for unit in AnyUnit::all() {
            assert_eq!(parse_unit(unit.identifier()), Ok(unit));
            assert_eq!(parse_unit(unit.symbol()), Ok(unit));
        }
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(parse_unit("meter"), Ok(AnyUnit::Length(Length::Meters)));
        assert_eq!(parse_unit("kilogram"), Ok(AnyUnit::Mass(Mass::Kilograms)));
        assert_eq!(parse_unit("kph"), Ok(AnyUnit::Speed(Speed::KilometersPerHour)));
        assert_eq!(parse_unit("degC"), Ok(AnyUnit::Temperature(Temperature::Celsius)));
        assert_eq!(parse_unit("um"), Ok(AnyUnit::Length(Length::Micrometers)));
    }

    #[test]
    fn test_greek_mu() {
        assert_eq!(parse_unit("\u{3bc}m"), Ok(AnyUnit::Length(Length::Micrometers)));
        assert_eq!(parse_unit("\u{3bc}s"), Ok(AnyUnit::Time(Time::Microseconds)));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(parse_unit("unknown_xyz"), Err(ConversionError::UnknownUnit("unknown_xyz".to_string())));
    }

    #[test]
    fn test_parse_conversion() {
        let (from, to) = parse_conversion("km->mi").unwrap();
        assert_eq!(from, AnyUnit::Length(Length::Kilometers));
        assert_eq!(to, AnyUnit::Length(Length::Miles));
    }

    #[test]
    fn test_parse_conversion_formats() {
        let expected = (AnyUnit::Temperature(Temperature::Celsius), AnyUnit::Temperature(Temperature::Fahrenheit));
        assert_eq!(parse_conversion("degC→degF"), Ok(expected));
        assert_eq!(parse_conversion("°C to °F"), Ok(expected));
        assert_eq!(parse_conversion("celsius in fahrenheit"), Ok(expected));
        assert_eq!(
            parse_conversion("ft in in"),
            Ok((AnyUnit::Length(Length::Feet), AnyUnit::Length(Length::Inches)))
        );
    }

    #[test]
    fn test_parse_conversion_invalid() {
        assert!(matches!(parse_conversion("km mi"), Err(ConversionError::InvalidQuantity(_))));
        assert!(matches!(parse_conversion("km->mi->ft"), Err(ConversionError::InvalidQuantity(_))));
        assert!(matches!(parse_conversion("km->cubits"), Err(ConversionError::UnknownUnit(_))));
        assert_eq!(
            parse_conversion("km mi"),
            Err(ConversionError::InvalidQuantity(
                "invalid conversion format: km mi, expected 'unit1->unit2'".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5 km"), Ok(Measurement::new(5.0, Length::Kilometers.into())));
        assert_eq!(parse_quantity("100kg"), Ok(Measurement::new(100.0, Mass::Kilograms.into())));
        assert_eq!(parse_quantity("-3.5 °C"), Ok(Measurement::new(-3.5, Temperature::Celsius.into())));
        assert_eq!(parse_quantity("1.5e3 m"), Ok(Measurement::new(1500.0, Length::Meters.into())));
        assert_eq!(parse_quantity("2 L/100km"), Ok(Measurement::new(2.0, FuelEfficiency::LitersPer100Kilometers.into())));
    }

    #[test]
    fn test_parse_quantity_exponent_boundary() {
        assert_eq!(parse_quantity("5exabytes"), Ok(Measurement::new(5.0, Data::Exabytes.into())));
        assert_eq!(parse_quantity("5 EB"), Ok(Measurement::new(5.0, Data::Exabytes.into())));
    }

    #[test]
    fn test_parse_quantity_invalid() {
        assert!(matches!(parse_quantity("km"), Err(ConversionError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("1.2.3 m"), Err(ConversionError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("42"), Err(ConversionError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("42 parsnips"), Err(ConversionError::UnknownUnit(_))));
    }

    #[test]
    fn test_parse_quantity_out_of_range() {
        assert_eq!(
            parse_quantity("1e400 m"),
            Err(ConversionError::InvalidQuantity("number out of range: 1e400".to_string()))
        );
        assert!(matches!(parse_quantity("-1e400 km"), Err(ConversionError::InvalidQuantity(_))));
        assert_eq!(parse_quantity("1e300 m"), Ok(Measurement::new(1e300, Length::Meters.into())));
    }

    #[test]
    fn test_measurement_from_str() {
        let m: Measurement = "12 mpg".parse().unwrap();
        assert_eq!(m, Measurement::new(12.0, FuelEfficiency::MilesPerGallon.into()));
    }
}
