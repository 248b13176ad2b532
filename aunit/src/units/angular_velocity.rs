//! Angular velocity units, base: radians per second

unit_table! {
    /// Units of angular velocity
    AngularVelocity, base RadiansPerSecond {
        RadiansPerSecond => "radiansPerSecond", "rad/s", linear(1.0);
        DegreesPerSecond => "degreesPerSecond", "°/s", linear(0.017453292519943295);
        RevolutionsPerMinute => "revolutionsPerMinute", "rpm", linear(0.10471975511965977);
        RevolutionsPerSecond => "revolutionsPerSecond", "rps", linear(6.283185307179586);
    }
}
