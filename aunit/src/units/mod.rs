//! Unit definitions - one closed enum per dimension
//!
//! Coefficients are the exact defined values (NIST SP 811, ISO 80000,
//! IAU 2012) relative to each dimension's base unit.

/// Declares a per-dimension unit enum and implements [`crate::Unit`] for it.
///
/// Each entry is `Variant => "identifier", "symbol", ctor(args);` where
/// `ctor` names a [`crate::UnitDefinition`] constructor. The base unit must be
/// listed first.
macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident, base $base:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $id:literal, $symbol:literal, $ctor:ident($($arg:expr),+ $(,)?);
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl $name {
            /// Every unit of this dimension, erased to [`crate::AnyUnit`]
            pub const UNITS: &'static [$crate::AnyUnit] = &[$($crate::AnyUnit::$name($name::$variant)),+];
        }

        impl $crate::Unit for $name {
            const DIMENSION: $crate::Dimension = $crate::Dimension::$name;
            const BASE: Self = $name::$base;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn definition(self) -> $crate::UnitDefinition {
                match self {
                    $($name::$variant => $crate::UnitDefinition::$ctor($($arg),+),)+
                }
            }

            fn identifier(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::Unit::symbol(*self))
            }
        }

        impl From<$name> for $crate::AnyUnit {
            fn from(unit: $name) -> Self {
                $crate::AnyUnit::$name(unit)
            }
        }

        impl TryFrom<$crate::AnyUnit> for $name {
            type Error = $crate::ConversionError;

            fn try_from(unit: $crate::AnyUnit) -> Result<Self, Self::Error> {
                match unit {
                    $crate::AnyUnit::$name(inner) => Ok(inner),
                    other => Err($crate::ConversionError::IncompatibleDimensions {
                        from: other.dimension(),
                        to: $crate::Dimension::$name,
                    }),
                }
            }
        }
    };
}

mod acceleration;
mod angle;
mod angular_velocity;
mod area;
mod concentration;
mod data;
mod electric;
mod energy;
mod frequency;
mod fuel_efficiency;
mod length;
mod mass;
mod power;
mod pressure;
mod speed;
mod temperature;
mod time;
mod volume;

pub use acceleration::Acceleration;
pub use angle::Angle;
pub use angular_velocity::AngularVelocity;
pub use area::Area;
pub use concentration::Concentration;
pub use data::Data;
pub use electric::{ElectricChargeCapacity, ElectricCurrent, ElectricPotential, ElectricResistance};
pub use energy::Energy;
pub use frequency::Frequency;
pub use fuel_efficiency::FuelEfficiency;
pub use length::Length;
pub use mass::Mass;
pub use power::Power;
pub use pressure::Pressure;
pub use speed::Speed;
pub use temperature::{Temperature, TemperatureDifference};
pub use time::Time;
pub use volume::Volume;
