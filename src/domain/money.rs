//! Monetary types and pt-BR currency helpers.
//!
//! Stakes and prizes are carried as [`Decimal`] in currency units. The backend
//! stores integer cents, so JSON output also reports amounts in cents.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::DomainError;

/// Monetary amount represented as a Decimal for precision.
pub type Money = Decimal;

const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an amount to integer cents, rounding half away from zero.
pub fn to_cents(amount: Money) -> Result<i64, DomainError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| DomainError::InvalidAmount {
            input: amount.to_string(),
            reason: "does not fit in 64-bit cents".into(),
        })
}

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{CURRENCY_SYMBOL} {}{DECIMAL_SEPARATOR}{cents}",
        group_thousands(units)
    )
}

/// Parse a pt-BR amount such as `1.234,56` or `R$ 10,00`.
pub fn parse_brl(input: &str) -> Result<Money, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAmount {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let body = unsigned
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(unsigned)
        .trim();

    if body.is_empty() {
        return Err(invalid("empty amount"));
    }

    let normalized: String = body
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    if normalized.matches('.').count() > 1
        || !normalized.chars().all(|c| c.is_ascii_digit() || c == '.')
        || !normalized.chars().any(|c| c.is_ascii_digit())
    {
        return Err(invalid("expected digits with an optional comma decimal mark"));
    }

    let value = Decimal::from_str(&normalized).map_err(|e| invalid(&e.to_string()))?;
    Ok(if negative { -value } else { value })
}

fn group_thousands(units: &str) -> String {
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, c) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
