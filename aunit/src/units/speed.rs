//! Speed units, base: meters per second

unit_table! {
    /// Units of speed
    Speed, base MetersPerSecond {
        MetersPerSecond => "metersPerSecond", "m/s", linear(1.0);
        /// 1852 m per hour
        Knots => "knots", "kn", linear(0.5144444444444445);
        FeetPerMinute => "feetPerMinute", "ft/min", linear(0.00508);
        KilometersPerHour => "kilometersPerHour", "km/h", linear(0.2777777777777778);
        FeetPerSecond => "feetPerSecond", "ft/s", linear(0.3048);
        MilesPerHour => "milesPerHour", "mph", linear(0.44704);
        InchesPerSecond => "inchesPerSecond", "in/s", linear(0.0254);
        YardsPerSecond => "yardsPerSecond", "yd/s", linear(0.9144);
    }
}
