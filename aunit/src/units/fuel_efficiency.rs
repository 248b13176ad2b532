//! Fuel efficiency units, base: kilometers per liter
//!
//! Distance-per-volume units are linear in the base unit. Volume-per-distance
//! units (L/100km) are its reciprocal.

unit_table! {
    /// Units of fuel efficiency
    FuelEfficiency, base KilometersPerLiter {
        KilometersPerLiter => "kilometersPerLiter", "km/L", linear(1.0);
        /// km/L = 100 / value
        LitersPer100Kilometers => "litersPer100Kilometers", "L/100km", reciprocal(100.0);
        MilesPerImperialGallon => "milesPerImperialGallon", "mpg imp", linear(0.3540061899346471);
        /// US gallon
        MilesPerGallon => "milesPerGallon", "mpg", linear(0.425143707430272);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_reciprocal_to_linear() {
        assert_relative_eq!(
            FuelEfficiency::LitersPer100Kilometers.convert_value(1.0, FuelEfficiency::MilesPerGallon),
            235.2145833,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            FuelEfficiency::LitersPer100Kilometers.convert_value(5.0, FuelEfficiency::KilometersPerLiter),
            20.0
        );
    }

    #[test]
    fn test_linear_to_reciprocal() {
        assert_relative_eq!(
            FuelEfficiency::MilesPerImperialGallon.convert_value(1.0, FuelEfficiency::LitersPer100Kilometers),
            282.4809363,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_us_and_imperial_gallons() {
        assert_relative_eq!(
            FuelEfficiency::MilesPerImperialGallon.convert_value(1.0, FuelEfficiency::MilesPerGallon),
            3.785411784 / 4.54609,
            max_relative = 1e-12
        );
    }
}
