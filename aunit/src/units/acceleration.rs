//! Acceleration units, base: meters per second squared

unit_table! {
    /// Units of acceleration
    Acceleration, base MetersPerSecondSquared {
        MetersPerSecondSquared => "metersPerSecondSquared", "m/s²", linear(1.0);
        /// Standard gravity
        Gravity => "gravity", "gₙ", linear(9.80665);
    }
}
