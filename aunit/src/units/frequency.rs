//! Frequency units, base: hertz

unit_table! {
    /// Units of frequency
    Frequency, base Hertz {
        Hertz => "hertz", "Hz", linear(1.0);
        Terahertz => "terahertz", "THz", linear(1e12);
        Gigahertz => "gigahertz", "GHz", linear(1e9);
        Megahertz => "megahertz", "MHz", linear(1e6);
        Kilohertz => "kilohertz", "kHz", linear(1e3);
        Millihertz => "millihertz", "mHz", linear(1e-3);
        Microhertz => "microhertz", "µHz", linear(1e-6);
        Nanohertz => "nanohertz", "nHz", linear(1e-9);
        FramesPerSecond => "framesPerSecond", "fps", linear(1.0);
    }
}
