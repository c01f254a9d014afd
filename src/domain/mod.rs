//! Pure room-pricing and tax-id logic.
//!
//! Nothing in this module performs I/O, logs, or keeps state between calls;
//! every function may be called concurrently from any number of threads.

pub mod error;

mod display;
mod input;
mod money;
mod multiplier;
mod odds;
mod pool;
mod redact;
mod tax_id;

pub use error::DomainError;

// Payout engine
pub use multiplier::compute_multiplier;
pub use odds::{ParseModeError, ProbabilityMode, RoomOdds, FORCE_SCALE, PAYOUT_SCALE};
pub use pool::{
    compute_house_take, compute_pool_share, compute_prize, fill_percentage, RoomEconomics,
};

// Money
pub use money::{format_brl, parse_brl, round_tenths, to_cents, Money};

// Tax ids
pub use display::{format_cpf, format_mobile_phone, format_tax_id_for_display};
pub use input::{FieldChange, TaxIdField};
pub use redact::redact_tax_ids;
pub use tax_id::{
    classify_tax_id, cnpj_check_digits, cpf_check_digits, is_valid_cnpj, is_valid_cpf,
    is_valid_tax_id, normalize_digits, TaxId, TaxIdKind, TaxIdRejection, CNPJ_LENGTH, CPF_LENGTH,
};
