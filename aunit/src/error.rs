//! Conversion and arithmetic errors
//!
//! Every failure here is an expected, recoverable outcome. Callers branch on
//! the `Err` (or call `.ok()` when the reason does not matter).

use thiserror::Error;

use crate::algebra::Operator;
use crate::Dimension;

/// Errors produced by conversions, quantity arithmetic and parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to dimensions that cannot be combined this way
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    IncompatibleDimensions { from: Dimension, to: Dimension },

    /// No dimensional rule covers this pairing
    #[error("unsupported operation: {lhs} {op} {rhs}")]
    UnsupportedOperation {
        lhs: Dimension,
        op: Operator,
        rhs: Dimension,
    },

    /// Unknown unit identifier, symbol or alias
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Unknown dimension identifier or name
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    /// Malformed quantity or conversion string
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl ConversionError {
    pub(crate) fn incompatible(from: Dimension, to: Dimension) -> Self {
        ConversionError::IncompatibleDimensions { from, to }
    }
}
