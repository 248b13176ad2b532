//! Volume units, base: liters

unit_table! {
    /// Units of volume
    Volume, base Liters {
        Liters => "liters", "L", linear(1.0);
        /// US liquid quart
        Quarts => "quarts", "qt", linear(0.946352946);
        CubicMeters => "cubicMeters", "m³", linear(1e3);
        CubicCentimeters => "cubicCentimeters", "cm³", linear(1e-3);
        /// US liquid gallon
        Gallons => "gallons", "gal", linear(3.785411784);
        Megaliters => "megaliters", "ML", linear(1e6);
        Kiloliters => "kiloliters", "kL", linear(1e3);
        Deciliters => "deciliters", "dL", linear(1e-1);
        Centiliters => "centiliters", "cL", linear(1e-2);
        Milliliters => "milliliters", "mL", linear(1e-3);
        CubicKilometers => "cubicKilometers", "km³", linear(1e12);
        CubicDecimeters => "cubicDecimeters", "dm³", linear(1.0);
        CubicMillimeters => "cubicMillimeters", "mm³", linear(1e-6);
        CubicInches => "cubicInches", "in³", linear(0.016387064);
        CubicFeet => "cubicFeet", "ft³", linear(28.316846592);
        CubicYards => "cubicYards", "yd³", linear(764.554857984);
        CubicMiles => "cubicMiles", "mi³", linear(4168181825440.58);
        AcreFeet => "acreFeet", "ac⋅ft", linear(1233481.83754752);
        /// US bushel
        Bushels => "bushels", "bu", linear(35.23907016688);
        Teaspoons => "teaspoons", "tsp", linear(0.00492892159375);
        Tablespoons => "tablespoons", "tbsp", linear(0.01478676478125);
        FluidOunces => "fluidOunces", "fl oz", linear(0.0295735295625);
        /// US legal cup
        Cups => "cups", "cup", linear(0.24);
        /// US liquid pint
        Pints => "pints", "pt", linear(0.473176473);
        ImperialTeaspoons => "imperialTeaspoons", "imp tsp", linear(0.005919388020833334);
        ImperialTablespoons => "imperialTablespoons", "imp tbsp", linear(0.0177581640625);
        ImperialFluidOunces => "imperialFluidOunces", "imp fl oz", linear(0.0284130625);
        ImperialPints => "imperialPints", "imp pt", linear(0.56826125);
        ImperialQuarts => "imperialQuarts", "imp qt", linear(1.1365225);
        ImperialGallons => "imperialGallons", "imp gal", linear(4.54609);
        MetricCups => "metricCups", "metric cup", linear(0.25);
    }
}
