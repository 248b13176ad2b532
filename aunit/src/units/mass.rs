//! Mass units, base: kilograms

unit_table! {
    /// Units of mass
    Mass, base Kilograms {
        Kilograms => "kilograms", "kg", linear(1.0);
        MetricTons => "metricTons", "t", linear(1e3);
        ShortTons => "shortTons", "ton", linear(907.18474);
        Kilopounds => "kilopounds", "kip", linear(453.59237);
        /// Avoirdupois pound
        Pounds => "pounds", "lb", linear(0.45359237);
        /// Avoirdupois ounce
        Ounces => "ounces", "oz", linear(0.028349523125);
        Grams => "grams", "g", linear(1e-3);
        Decigrams => "decigrams", "dg", linear(1e-4);
        Centigrams => "centigrams", "cg", linear(1e-5);
        Milligrams => "milligrams", "mg", linear(1e-6);
        Micrograms => "micrograms", "µg", linear(1e-9);
        Nanograms => "nanograms", "ng", linear(1e-12);
        Picograms => "picograms", "pg", linear(1e-15);
        Stones => "stones", "st", linear(6.35029318);
        /// Metric carat
        Carats => "carats", "ct", linear(2e-4);
        OuncesTroy => "ouncesTroy", "oz t", linear(0.0311034768);
        Slugs => "slugs", "slug", linear(14.593902937206362);
    }
}
