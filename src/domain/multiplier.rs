//! Payout multiplier engine.
//!
//! The multiplier a winning participant receives is derived from the room's
//! base rate and the probability denominator selected by [`ProbabilityMode`]:
//!
//! ```text
//! raw = base_rate * PAYOUT_SCALE / prob
//! raw = raw ± raw * (force / FORCE_SCALE)     (sign from ProbabilityMode::skew_sign)
//! result = clamp(raw) or round_tenths(raw)
//! ```

use rust_decimal::Decimal;

use super::error::DomainError;
use super::money::round_tenths;
use super::odds::{ProbabilityMode, RoomOdds, FORCE_SCALE, PAYOUT_SCALE};

/// Compute the guaranteed multiplier for `odds` under `mode`.
///
/// Clamps take precedence over the computed value and are returned exactly;
/// an unclamped value is rounded to one decimal place, half away from zero.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] when the selected probability
/// denominator is not positive, when the base rate is negative, or when the
/// computation leaves the decimal range.
pub fn compute_multiplier(odds: &RoomOdds, mode: ProbabilityMode) -> Result<Decimal, DomainError> {
    let prob = mode.denominator(odds);
    if prob <= Decimal::ZERO {
        return Err(DomainError::non_positive(denominator_name(mode), prob));
    }
    if odds.base_rate() < Decimal::ZERO {
        return Err(DomainError::negative("base_rate", odds.base_rate()));
    }

    let mut raw = odds
        .base_rate()
        .checked_mul(PAYOUT_SCALE)
        .and_then(|scaled| scaled.checked_div(prob))
        .ok_or_else(|| out_of_range("base_rate"))?;

    if let Some(force) = odds.force_adjustment().filter(|force| !force.is_zero()) {
        let skew = raw
            .checked_mul(force / FORCE_SCALE)
            .ok_or_else(|| out_of_range("force_adjustment"))?;
        raw = raw
            .checked_add(mode.skew_sign() * skew)
            .ok_or_else(|| out_of_range("force_adjustment"))?;
    }

    // A force beyond the scale in primary mode would flip the sign.
    let raw = raw.max(Decimal::ZERO);

    if let Some(min) = odds.min_multiplier() {
        if raw < min {
            return Ok(min);
        }
    }
    if let Some(max) = odds.max_multiplier() {
        if raw > max {
            return Ok(max);
        }
    }

    Ok(round_tenths(raw))
}

fn denominator_name(mode: ProbabilityMode) -> &'static str {
    match mode {
        ProbabilityMode::Primary => "probability_primary",
        ProbabilityMode::Secondary => "probability_secondary",
    }
}

fn out_of_range(parameter: &'static str) -> DomainError {
    DomainError::InvalidParameter {
        parameter,
        reason: "multiplier exceeds the decimal range".into(),
    }
}
