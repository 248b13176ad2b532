//! AUnit - Typed units of measure and conversions
//!
//! Provides per-dimension unit enums, a conversion engine between units of
//! one dimension, and value types that carry their unit. Products and
//! quotients across dimensions go through a fixed table of physical
//! relationships.
//!
//! Dimensions:
//! - Length (m, km, ft, mi, ly, pc, etc.)
//! - Speed (m/s, km/h, mph, kn, etc.)
//! - Pressure (Pa, bar, psi, inHg, etc.)
//! - Temperature (K, °C, °F, °R) and temperature difference (Δ°C, Δ°F)
//! - Mass (kg, g, lb, oz, st, etc.)
//! - Volume (L, m³, gal, cup, imp pt, etc.)
//! - Acceleration (m/s², gₙ)
//! - Power (W, kW, hp, etc.)
//! - Angle and angular velocity (°, rad, rev, rpm, etc.)
//! - Area (m², ha, ac, etc.)
//! - Concentration (g/L, mg/dL, ppm)
//! - Time (s, min, h, d, yr, etc.)
//! - Electricity (C, Ah, A, V, Ω)
//! - Energy (J, cal, kWh, etc.)
//! - Frequency (Hz, fps, etc.)
//! - Fuel efficiency (km/L, L/100km, mpg)
//! - Data (B, bit, kB, KiB, etc.)
//!
//! ```
//! use aunit::{Length, Quantity};
//!
//! let trip = Quantity::new(1.0, Length::Kilometers) + Quantity::new(500.0, Length::Meters);
//! assert_eq!(trip, Quantity::new(1.5, Length::Kilometers));
//! ```

mod dimension;
mod unit;
mod error;
mod convert;
mod measurement;
mod quantity;
mod parse;
pub mod algebra;
pub mod units;

pub use dimension::Dimension;
pub use unit::{AnyUnit, Scale, Unit, UnitDefinition};
pub use error::ConversionError;
pub use convert::{convert, from_base, to_base};
pub use measurement::Measurement;
pub use quantity::Quantity;
pub use algebra::{DimensionalRule, Operator};
pub use parse::{parse_conversion, parse_quantity, parse_unit};
pub use units::*;
