//! Plane angle units, base: degrees

unit_table! {
    /// Units of plane angle
    Angle, base Degrees {
        Degrees => "degrees", "°", linear(1.0);
        ArcMinutes => "arcMinutes", "′", linear(0.016666666666666666);
        ArcSeconds => "arcSeconds", "″", linear(0.0002777777777777778);
        Radians => "radians", "rad", linear(57.29577951308232);
        Gradians => "gradians", "grad", linear(0.9);
        Revolutions => "revolutions", "rev", linear(360.0);
    }
}
