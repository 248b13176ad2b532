//! Length units, base: meters

unit_table! {
    /// Units of length
    Length, base Meters {
        Meters => "meters", "m", linear(1.0);
        Feet => "feet", "ft", linear(0.3048);
        /// International nautical mile
        NauticalMiles => "nauticalMiles", "NM", linear(1852.0);
        Kilometers => "kilometers", "km", linear(1e3);
        /// International (statute) mile
        Miles => "miles", "mi", linear(1609.344);
        Megameters => "megameters", "Mm", linear(1e6);
        Hectometers => "hectometers", "hm", linear(1e2);
        Decameters => "decameters", "dam", linear(1e1);
        Decimeters => "decimeters", "dm", linear(1e-1);
        Centimeters => "centimeters", "cm", linear(1e-2);
        Millimeters => "millimeters", "mm", linear(1e-3);
        Micrometers => "micrometers", "µm", linear(1e-6);
        Nanometers => "nanometers", "nm", linear(1e-9);
        Picometers => "picometers", "pm", linear(1e-12);
        Inches => "inches", "in", linear(0.0254);
        Yards => "yards", "yd", linear(0.9144);
        /// Swedish/Norwegian mil
        ScandinavianMiles => "scandinavianMiles", "mil", linear(1e4);
        /// Julian light-year (IAU)
        Lightyears => "lightyears", "ly", linear(9.4607304725808e15);
        Fathoms => "fathoms", "ftm", linear(1.8288);
        Furlongs => "furlongs", "fur", linear(201.168);
        /// IAU 2012 definition
        AstronomicalUnits => "astronomicalUnits", "au", linear(1.495978707e11);
        /// 648000/π astronomical units
        Parsecs => "parsecs", "pc", linear(3.0856775814913673e16);
    }
}
