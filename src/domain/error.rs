//! Domain validation errors for the payout and money helpers.
//!
//! These errors are returned when a caller supplies input that makes a
//! computation mathematically meaningless, such as a zero divisor.
//!
//! # Examples
//!
//! ```
//! use bolao::domain::{compute_multiplier, DomainError, ProbabilityMode, RoomOdds};
//! use rust_decimal_macros::dec;
//!
//! let odds = RoomOdds::new(dec!(10), 20, dec!(1), dec!(0), dec!(5));
//! let result = compute_multiplier(&odds, ProbabilityMode::Primary);
//!
//! assert!(matches!(result, Err(DomainError::InvalidParameter { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain inputs violate a computation's preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A parameter made the computation undefined (zero divisor, negative rate, ...).
    #[error("invalid parameter {parameter}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// A monetary amount could not be parsed or represented.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The input as received.
        input: String,
        /// Human-readable explanation.
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn non_positive(parameter: &'static str, value: Decimal) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: format!("must be greater than zero, got {value}"),
        }
    }

    pub(crate) fn negative(parameter: &'static str, value: Decimal) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: format!("must not be negative, got {value}"),
        }
    }
}
