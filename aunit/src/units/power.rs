//! Power units, base: watts

unit_table! {
    /// Units of power
    Power, base Watts {
        Watts => "watts", "W", linear(1.0);
        Terawatts => "terawatts", "TW", linear(1e12);
        Gigawatts => "gigawatts", "GW", linear(1e9);
        Megawatts => "megawatts", "MW", linear(1e6);
        Kilowatts => "kilowatts", "kW", linear(1e3);
        Milliwatts => "milliwatts", "mW", linear(1e-3);
        Microwatts => "microwatts", "µW", linear(1e-6);
        Nanowatts => "nanowatts", "nW", linear(1e-9);
        Picowatts => "picowatts", "pW", linear(1e-12);
        Femtowatts => "femtowatts", "fW", linear(1e-15);
        /// Mechanical (imperial) horsepower
        Horsepower => "horsepower", "hp", linear(745.6998715822702);
    }
}
