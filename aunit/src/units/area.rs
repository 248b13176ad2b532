//! Area units, base: square meters

unit_table! {
    /// Units of area
    Area, base SquareMeters {
        SquareMeters => "squareMeters", "m²", linear(1.0);
        SquareMegameters => "squareMegameters", "Mm²", linear(1e12);
        SquareKilometers => "squareKilometers", "km²", linear(1e6);
        SquareCentimeters => "squareCentimeters", "cm²", linear(1e-4);
        SquareMillimeters => "squareMillimeters", "mm²", linear(1e-6);
        SquareMicrometers => "squareMicrometers", "µm²", linear(1e-12);
        SquareNanometers => "squareNanometers", "nm²", linear(1e-18);
        SquareInches => "squareInches", "in²", linear(0.00064516);
        SquareFeet => "squareFeet", "ft²", linear(0.09290304);
        SquareYards => "squareYards", "yd²", linear(0.83612736);
        SquareMiles => "squareMiles", "mi²", linear(2589988.110336);
        /// International acre
        Acres => "acres", "ac", linear(4046.8564224);
        Ares => "ares", "a", linear(1e2);
        Hectares => "hectares", "ha", linear(1e4);
    }
}
