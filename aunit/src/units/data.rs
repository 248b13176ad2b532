//! Digital information units, base: bytes
//!
//! SI prefixes are decimal (1 kB = 1000 B); IEC prefixes are binary
//! (1 KiB = 1024 B).

unit_table! {
    /// Units of digital information
    Data, base Bytes {
        Bytes => "bytes", "B", linear(1.0);
        Bits => "bits", "bit", linear(0.125);
        Nibbles => "nibbles", "nibble", linear(0.5);
        Yottabytes => "yottabytes", "YB", linear(1e24);
        Zettabytes => "zettabytes", "ZB", linear(1e21);
        Exabytes => "exabytes", "EB", linear(1e18);
        Petabytes => "petabytes", "PB", linear(1e15);
        Terabytes => "terabytes", "TB", linear(1e12);
        Gigabytes => "gigabytes", "GB", linear(1e9);
        Megabytes => "megabytes", "MB", linear(1e6);
        Kilobytes => "kilobytes", "kB", linear(1e3);
        Yottabits => "yottabits", "Ybit", linear(1.25e23);
        Zettabits => "zettabits", "Zbit", linear(1.25e20);
        Exabits => "exabits", "Ebit", linear(1.25e17);
        Petabits => "petabits", "Pbit", linear(1.25e14);
        Terabits => "terabits", "Tbit", linear(1.25e11);
        Gigabits => "gigabits", "Gbit", linear(1.25e8);
        Megabits => "megabits", "Mbit", linear(1.25e5);
        Kilobits => "kilobits", "kbit", linear(125.0);
        Yobibytes => "yobibytes", "YiB", linear(1.2089258196146292e24);
        Zebibytes => "zebibytes", "ZiB", linear(1.1805916207174113e21);
        Exbibytes => "exbibytes", "EiB", linear(1.152921504606847e18);
        Pebibytes => "pebibytes", "PiB", linear(1125899906842624.0);
        Tebibytes => "tebibytes", "TiB", linear(1099511627776.0);
        Gibibytes => "gibibytes", "GiB", linear(1073741824.0);
        Mebibytes => "mebibytes", "MiB", linear(1048576.0);
        Kibibytes => "kibibytes", "KiB", linear(1024.0);
        Yobibits => "yobibits", "Yibit", linear(1.5111572745182865e23);
        Zebibits => "zebibits", "Zibit", linear(1.4757395258967641e20);
        Exbibits => "exbibits", "Eibit", linear(1.4411518807585587e17);
        Pebibits => "pebibits", "Pibit", linear(140737488355328.0);
        Tebibits => "tebibits", "Tibit", linear(137438953472.0);
        Gibibits => "gibibits", "Gibit", linear(134217728.0);
        Mebibits => "mebibits", "Mibit", linear(131072.0);
        Kibibits => "kibibits", "Kibit", linear(128.0);
    }
}
