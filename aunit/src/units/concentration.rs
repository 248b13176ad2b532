//! Mass concentration units, base: grams per liter

unit_table! {
    /// Units of mass concentration
    Concentration, base GramsPerLiter {
        GramsPerLiter => "gramsPerLiter", "g/L", linear(1.0);
        MilligramsPerDeciliter => "milligramsPerDeciliter", "mg/dL", linear(1e-2);
        /// Mass fraction in water: 1 ppm = 1 mg/L
        PartsPerMillion => "partsPerMillion", "ppm", linear(1e-3);
    }
}
