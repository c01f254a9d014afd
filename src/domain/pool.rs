//! Pool arithmetic for a room: pool share, prize, house take and occupancy.
//!
//! These figures are independent of the probability multiplier; they only
//! depend on the stake, the number of seats and the room's return percentage.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::money::Money;
use super::multiplier::compute_multiplier;
use super::odds::{ProbabilityMode, RoomOdds};

/// Per-winner share of a full room's pool.
///
/// `(stake * participant_limit / 100) * return_percentage`
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] when `stake` is not positive or
/// `participant_limit` is zero.
pub fn compute_pool_share(
    stake: Money,
    participant_limit: u32,
    return_percentage: Decimal,
) -> Result<Money, DomainError> {
    if stake <= Decimal::ZERO {
        return Err(DomainError::non_positive("stake", stake));
    }
    if participant_limit == 0 {
        return Err(DomainError::non_positive(
            "participant_limit",
            Decimal::ZERO,
        ));
    }

    let collected = collected(stake, participant_limit)?;
    (collected / Decimal::ONE_HUNDRED)
        .checked_mul(return_percentage)
        .ok_or_else(|| out_of_range("return_percentage"))
}

/// Prize for the seats taken so far.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] when `stake` is negative,
/// `return_percentage` is outside `0..=100`, or the collected stakes leave
/// the decimal range.
pub fn compute_prize(
    stake: Money,
    participants: u32,
    return_percentage: Decimal,
) -> Result<Money, DomainError> {
    check_percentage(return_percentage)?;
    let collected = collected_so_far(stake, participants)?;
    collected
        .checked_mul(return_percentage)
        .map(|returned| returned / Decimal::ONE_HUNDRED)
        .ok_or_else(|| out_of_range("stake"))
}

/// Part of the collected stakes kept by the house.
///
/// # Errors
///
/// Same conditions as [`compute_prize`].
pub fn compute_house_take(
    stake: Money,
    participants: u32,
    return_percentage: Decimal,
) -> Result<Money, DomainError> {
    check_percentage(return_percentage)?;
    let collected = collected_so_far(stake, participants)?;
    collected
        .checked_mul(Decimal::ONE_HUNDRED - return_percentage)
        .map(|kept| kept / Decimal::ONE_HUNDRED)
        .ok_or_else(|| out_of_range("stake"))
}

/// Occupancy of a room as a percentage of its seats.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] when `participant_limit` is zero.
pub fn fill_percentage(participants: u32, participant_limit: u32) -> Result<Decimal, DomainError> {
    if participant_limit == 0 {
        return Err(DomainError::non_positive(
            "participant_limit",
            Decimal::ZERO,
        ));
    }
    Ok(Decimal::from(participants) / Decimal::from(participant_limit) * Decimal::ONE_HUNDRED)
}

/// Everything the room card shows, computed in one pass.
///
/// A room whose odds cannot be computed still has its pool figures; the
/// multiplier is `None` and the display shows the odds as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomEconomics {
    pub mode: ProbabilityMode,
    pub multiplier: Option<Decimal>,
    pub pool_share: Option<Money>,
    pub prize: Money,
    pub house_take: Money,
    pub fill_percentage: Decimal,
}

impl RoomEconomics {
    /// Evaluate `odds` for `participants` seats taken.
    ///
    /// # Errors
    ///
    /// Fails only when the occupancy figures themselves are invalid
    /// (percentage out of range, zero seats); multiplier and pool share
    /// failures are folded into `None`.
    pub fn evaluate(
        odds: &RoomOdds,
        participants: u32,
        return_percentage: Decimal,
        mode: ProbabilityMode,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            mode,
            multiplier: compute_multiplier(odds, mode).ok(),
            pool_share: compute_pool_share(odds.stake(), odds.participant_limit(), return_percentage)
                .ok(),
            prize: compute_prize(odds.stake(), participants, return_percentage)?,
            house_take: compute_house_take(odds.stake(), participants, return_percentage)?,
            fill_percentage: fill_percentage(participants, odds.participant_limit())?,
        })
    }

    /// Whether the multiplier could be computed.
    #[must_use]
    pub const fn odds_available(&self) -> bool {
        self.multiplier.is_some()
    }
}

fn check_percentage(return_percentage: Decimal) -> Result<(), DomainError> {
    if return_percentage < Decimal::ZERO || return_percentage > Decimal::ONE_HUNDRED {
        return Err(DomainError::InvalidParameter {
            parameter: "return_percentage",
            reason: format!("must be between 0 and 100, got {return_percentage}"),
        });
    }
    Ok(())
}

fn collected_so_far(stake: Money, participants: u32) -> Result<Money, DomainError> {
    if stake < Decimal::ZERO {
        return Err(DomainError::negative("stake", stake));
    }
    collected(stake, participants)
}

fn collected(stake: Money, seats: u32) -> Result<Money, DomainError> {
    stake
        .checked_mul(Decimal::from(seats))
        .ok_or_else(|| out_of_range("stake"))
}

fn out_of_range(parameter: &'static str) -> DomainError {
    DomainError::InvalidParameter {
        parameter,
        reason: "pool exceeds the decimal range".into(),
    }
}
