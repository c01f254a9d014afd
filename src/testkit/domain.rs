//! Builders for domain values used across tests.
//!
//! Provides concise factory functions for [`RoomOdds`] and digit strings for
//! valid CPFs and CNPJs so tests focus on assertions rather than
//! construction boilerplate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{cnpj_check_digits, cpf_check_digits, RoomOdds};

/// A room with a R$ 10 stake and 20 seats, parameterized by rate and
/// probability denominators.
pub fn room(base_rate: Decimal, primary: Decimal, secondary: Decimal) -> RoomOdds {
    RoomOdds::new(dec!(10), 20, base_rate, primary, secondary)
}

/// A room that prices to exactly `1.0` in primary mode.
pub fn unit_room() -> RoomOdds {
    room(dec!(1), dec!(50), dec!(50))
}

/// A room with both clamps set.
pub fn clamped_room(base_rate: Decimal, prob: Decimal, min: Decimal, max: Decimal) -> RoomOdds {
    room(base_rate, prob, prob)
        .with_min_multiplier(min)
        .with_max_multiplier(max)
}

fn digits_of<const N: usize>(base: &[u8; N]) -> String {
    base.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Complete a 9-digit base into a valid CPF digit string.
pub fn valid_cpf(base: [u8; 9]) -> String {
    let [d1, d2] = cpf_check_digits(&base);
    format!("{}{d1}{d2}", digits_of(&base))
}

/// Complete a 12-digit base into a valid CNPJ digit string.
pub fn valid_cnpj(base: [u8; 12]) -> String {
    let [d1, d2] = cnpj_check_digits(&base);
    format!("{}{d1}{d2}", digits_of(&base))
}

/// Valid CPFs seen in fixtures.
pub const KNOWN_CPFS: &[&str] = &["52998224725", "12345678909", "11144477735", "00000000191"];

/// Valid CNPJs seen in fixtures.
pub const KNOWN_CNPJS: &[&str] = &["11222333000181", "12345678000195", "04597067000106"];

/// Flip the last digit so the checksum no longer matches.
pub fn corrupt_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    if let Some(last) = chars.last_mut() {
        *last = if *last == '9' { '0' } else { char::from(*last as u8 + 1) };
    }
    chars.into_iter().collect()
}
