//! Time units, base: seconds

unit_table! {
    /// Units of time
    Time, base Seconds {
        Seconds => "seconds", "s", linear(1.0);
        Hours => "hours", "h", linear(3600.0);
        Minutes => "minutes", "min", linear(60.0);
        Milliseconds => "milliseconds", "ms", linear(1e-3);
        Microseconds => "microseconds", "µs", linear(1e-6);
        Nanoseconds => "nanoseconds", "ns", linear(1e-9);
        Picoseconds => "picoseconds", "ps", linear(1e-12);
        Days => "days", "d", linear(86400.0);
        Weeks => "weeks", "wk", linear(604800.0);
        /// Julian year, 365.25 days
        Years => "years", "yr", linear(31557600.0);
        Decades => "decades", "dec", linear(315576000.0);
        Centuries => "centuries", "c", linear(3155760000.0);
    }
}
