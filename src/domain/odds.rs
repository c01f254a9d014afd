//! Room odds parameters and the constants of the payout formula.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;

/// Scaling factor applied to the base rate before dividing by the
/// probability denominator. Fixed by the payout formula.
pub const PAYOUT_SCALE: Decimal = dec!(50);

/// Normalization constant for the force adjustment; forces are expressed on a
/// 0..70 scale, so a force of 70 is a 100% skew.
pub const FORCE_SCALE: Decimal = dec!(70);

/// Which probability denominator a multiplier is computed against.
///
/// Room records historically tag these as `"A"` and `"B"`; both spellings
/// deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityMode {
    #[default]
    #[serde(alias = "A", alias = "a")]
    Primary,
    #[serde(alias = "B", alias = "b")]
    Secondary,
}

impl ProbabilityMode {
    /// Sign with which the force adjustment is applied.
    ///
    /// Primary subtracts the skew and Secondary adds it. No product rationale
    /// is recorded for the asymmetry; confirm with the product owner before
    /// changing either arm, since a flipped sign silently misprices payouts.
    #[must_use]
    pub const fn skew_sign(self) -> Decimal {
        match self {
            Self::Primary => Decimal::NEGATIVE_ONE,
            Self::Secondary => Decimal::ONE,
        }
    }

    /// Probability denominator this mode selects from `odds`.
    ///
    /// The secondary denominator is an integer quantity; any fractional part
    /// is truncated.
    #[must_use]
    pub fn denominator(self, odds: &RoomOdds) -> Decimal {
        match self {
            Self::Primary => odds.probability_primary,
            Self::Secondary => odds.probability_secondary.trunc(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ProbabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a probability mode tag is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown probability mode '{0}' (expected primary, secondary, A or B)")]
pub struct ParseModeError(String);

impl FromStr for ProbabilityMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "a" => Ok(Self::Primary),
            "secondary" | "b" => Ok(Self::Secondary),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Financial and probability parameters of a room.
///
/// Field aliases accept the legacy room-record spelling so records coming
/// from the room API deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOdds {
    #[serde(alias = "valor_entrada")]
    stake: Money,
    #[serde(alias = "quantidade_jogadores")]
    participant_limit: u32,
    #[serde(alias = "base")]
    base_rate: Decimal,
    #[serde(alias = "probabilidadeA")]
    probability_primary: Decimal,
    #[serde(alias = "probabilidadeB")]
    probability_secondary: Decimal,
    #[serde(default, alias = "forcaA")]
    force_adjustment: Option<Decimal>,
    #[serde(default, alias = "min")]
    min_multiplier: Option<Decimal>,
    #[serde(default, alias = "max")]
    max_multiplier: Option<Decimal>,
}

impl RoomOdds {
    /// Create room odds without force adjustment or clamps.
    #[must_use]
    pub fn new(
        stake: Money,
        participant_limit: u32,
        base_rate: Decimal,
        probability_primary: Decimal,
        probability_secondary: Decimal,
    ) -> Self {
        Self {
            stake,
            participant_limit,
            base_rate,
            probability_primary,
            probability_secondary,
            force_adjustment: None,
            min_multiplier: None,
            max_multiplier: None,
        }
    }

    /// Set the force adjustment.
    #[must_use]
    pub fn with_force_adjustment(mut self, force: Decimal) -> Self {
        self.force_adjustment = Some(force);
        self
    }

    /// Set the lower clamp.
    #[must_use]
    pub fn with_min_multiplier(mut self, min: Decimal) -> Self {
        self.min_multiplier = Some(min);
        self
    }

    /// Set the upper clamp.
    #[must_use]
    pub fn with_max_multiplier(mut self, max: Decimal) -> Self {
        self.max_multiplier = Some(max);
        self
    }

    /// Fill clamps that the room leaves unset from fallback values.
    #[must_use]
    pub fn or_clamps(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_multiplier = self.min_multiplier.or(min);
        self.max_multiplier = self.max_multiplier.or(max);
        self
    }

    #[must_use]
    pub const fn stake(&self) -> Money {
        self.stake
    }

    #[must_use]
    pub const fn participant_limit(&self) -> u32 {
        self.participant_limit
    }

    #[must_use]
    pub const fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    #[must_use]
    pub const fn probability_primary(&self) -> Decimal {
        self.probability_primary
    }

    #[must_use]
    pub const fn probability_secondary(&self) -> Decimal {
        self.probability_secondary
    }

    #[must_use]
    pub const fn force_adjustment(&self) -> Option<Decimal> {
        self.force_adjustment
    }

    #[must_use]
    pub const fn min_multiplier(&self) -> Option<Decimal> {
        self.min_multiplier
    }

    #[must_use]
    pub const fn max_multiplier(&self) -> Option<Decimal> {
        self.max_multiplier
    }
}
