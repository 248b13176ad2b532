//! Temperature units
//!
//! Absolute temperatures are affine: `kelvin = (value + constant) * coefficient`,
//! with the constant expressed in the unit's own degrees. Temperature
//! differences are plain intervals and only scale.

unit_table! {
    /// Absolute temperature scales, base: kelvin
    Temperature, base Kelvin {
        Kelvin => "kelvin", "K", affine(1.0, 0.0);
        Celsius => "celsius", "°C", affine(1.0, 273.15);
        Fahrenheit => "fahrenheit", "°F", affine(0.5555555555555556, 459.67);
        Rankine => "rankine", "°R", affine(0.5555555555555556, 0.0);
    }
}

unit_table! {
    /// Temperature intervals, base: celsius degree (equal to the kelvin)
    TemperatureDifference, base CelsiusDelta {
        CelsiusDelta => "celsiusDelta", "Δ°C", linear(1.0);
        FahrenheitDelta => "fahrenheitDelta", "Δ°F", linear(0.5555555555555556);
    }
}

impl Temperature {
    /// The interval unit whose degree has the same size as this scale's
    pub fn difference_unit(self) -> TemperatureDifference {
        match self {
            Temperature::Kelvin | Temperature::Celsius => TemperatureDifference::CelsiusDelta,
            Temperature::Fahrenheit | Temperature::Rankine => TemperatureDifference::FahrenheitDelta,
        }
    }
}
