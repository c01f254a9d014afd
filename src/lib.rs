//! Bolao - room payout and tax-id core for a pool-betting product.
//!
//! Users join rooms by paying a fixed stake; the pooled stakes fund a prize
//! and the room advertises a guaranteed payout multiplier. Deposits and
//! withdrawals are gated by a Brazilian tax id (CPF or CNPJ).
//!
//! # Modules
//!
//! - [`domain`] - Pure pricing and tax-id logic: multiplier engine, room
//!   economics, CPF/CNPJ validation and display formatting, BRL helpers
//! - [`error`] - Error types for the crate
//! - [`infrastructure`] - TOML configuration and tracing setup
//! - [`adapter`] - The `bolao` command-line interface
//!
//! # Features
//!
//! - `testkit` - Expose builders and tax-id generators for integration tests
//!
//! # Example
//!
//! ```
//! use bolao::domain::{classify_tax_id, compute_multiplier, ProbabilityMode, RoomOdds, TaxIdKind};
//! use rust_decimal_macros::dec;
//!
//! let odds = RoomOdds::new(dec!(10), 20, dec!(2), dec!(25), dec!(10)).with_force_adjustment(dec!(35));
//! assert_eq!(compute_multiplier(&odds, ProbabilityMode::Primary).unwrap(), dec!(2.0));
//!
//! assert_eq!(classify_tax_id("529.982.247-25").kind(), TaxIdKind::Cpf);
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
