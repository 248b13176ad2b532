//! Energy units, base: joules

unit_table! {
    /// Units of energy
    Energy, base Joules {
        Joules => "joules", "J", linear(1.0);
        Kilojoules => "kilojoules", "kJ", linear(1e3);
        /// Thermochemical kilocalorie
        Kilocalories => "kilocalories", "kcal", linear(4184.0);
        /// Thermochemical calorie
        Calories => "calories", "cal", linear(4.184);
        KilowattHours => "kilowattHours", "kWh", linear(3.6e6);
        WattHours => "wattHours", "Wh", linear(3600.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_conversions() {
        assert_eq!(Energy::KilowattHours.convert_value(1.0, Energy::WattHours), 1000.0);
        assert_relative_eq!(Energy::Kilocalories.convert_value(1.0, Energy::Calories), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(Energy::WattHours.convert_value(1.0, Energy::Kilojoules), 3.6, max_relative = 1e-12);
    }
}
