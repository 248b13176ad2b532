//! Pressure units, base: pascals (newtons per square meter)

unit_table! {
    /// Units of pressure
    Pressure, base NewtonsPerMetersSquared {
        NewtonsPerMetersSquared => "newtonsPerMetersSquared", "Pa", linear(1.0);
        Hectopascals => "hectopascals", "hPa", linear(1e2);
        /// Conventional, at 0 °C
        InchesOfMercury => "inchesOfMercury", "inHg", linear(3386.389);
        /// Conventional, at 0 °C
        MillimetersOfMercury => "millimetersOfMercury", "mmHg", linear(133.322387415);
        Gigapascals => "gigapascals", "GPa", linear(1e9);
        Megapascals => "megapascals", "MPa", linear(1e6);
        Kilopascals => "kilopascals", "kPa", linear(1e3);
        Bars => "bars", "bar", linear(1e5);
        Millibars => "millibars", "mbar", linear(1e2);
        PoundsForcePerSquareInch => "poundsForcePerSquareInch", "psi", linear(6894.757293168361);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_pressure_conversions() {
        assert_relative_eq!(Pressure::Bars.convert_value(1.0, Pressure::Kilopascals), 100.0);
        assert_eq!(Pressure::Millibars.convert_value(1013.25, Pressure::Hectopascals), 1013.25);
        assert_relative_eq!(Pressure::PoundsForcePerSquareInch.convert_value(14.6959, Pressure::Kilopascals), 101.325, max_relative = 1e-5);
        assert_relative_eq!(Pressure::InchesOfMercury.convert_value(29.92, Pressure::Millibars), 1013.21, max_relative = 1e-4);
    }
}
