//! Electrical units: charge, current, potential, resistance

unit_table! {
    /// Units of electric charge, base: coulombs (ampere-seconds)
    ElectricChargeCapacity, base Coulombs {
        Coulombs => "coulombs", "C", linear(1.0);
        MegaampereHours => "megaampereHours", "MAh", linear(3.6e9);
        KiloampereHours => "kiloampereHours", "kAh", linear(3.6e6);
        AmpereHours => "ampereHours", "Ah", linear(3600.0);
        MilliampereHours => "milliampereHours", "mAh", linear(3.6);
        MicroampereHours => "microampereHours", "µAh", linear(3.6e-3);
    }
}

unit_table! {
    /// Units of electric current, base: amperes
    ElectricCurrent, base Amperes {
        Amperes => "amperes", "A", linear(1.0);
        Megaamperes => "megaamperes", "MA", linear(1e6);
        Kiloamperes => "kiloamperes", "kA", linear(1e3);
        Milliamperes => "milliamperes", "mA", linear(1e-3);
        Microamperes => "microamperes", "µA", linear(1e-6);
    }
}

unit_table! {
    /// Units of electric potential, base: volts
    ElectricPotential, base Volts {
        Volts => "volts", "V", linear(1.0);
        Megavolts => "megavolts", "MV", linear(1e6);
        Kilovolts => "kilovolts", "kV", linear(1e3);
        Millivolts => "millivolts", "mV", linear(1e-3);
        Microvolts => "microvolts", "µV", linear(1e-6);
    }
}

unit_table! {
    /// Units of electric resistance, base: ohms
    ElectricResistance, base Ohms {
        Ohms => "ohms", "Ω", linear(1.0);
        Megaohms => "megaohms", "MΩ", linear(1e6);
        Kiloohms => "kiloohms", "kΩ", linear(1e3);
        Milliohms => "milliohms", "mΩ", linear(1e-3);
        Microohms => "microohms", "µΩ", linear(1e-6);
    }
}
