//! Defaults applied when evaluating room odds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{ProbabilityMode, RoomOdds};

/// Odds evaluation defaults.
///
/// The clamps here only fill in for rooms that carry none of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsConfig {
    /// Probability mode used when a command does not name one.
    #[serde(default)]
    pub mode: ProbabilityMode,
    /// Fallback lower clamp.
    #[serde(default)]
    pub min_multiplier: Option<Decimal>,
    /// Fallback upper clamp.
    #[serde(default)]
    pub max_multiplier: Option<Decimal>,
    /// Return percentage assumed for rooms listed without one.
    #[serde(default = "default_return_percentage")]
    pub return_percentage: Decimal,
}

fn default_return_percentage() -> Decimal {
    Decimal::from(80)
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            mode: ProbabilityMode::default(),
            min_multiplier: None,
            max_multiplier: None,
            return_percentage: default_return_percentage(),
        }
    }
}

impl OddsConfig {
    /// Apply the fallback clamps to `odds`.
    #[must_use]
    pub fn apply(&self, odds: RoomOdds) -> RoomOdds {
        odds.or_clamps(self.min_multiplier, self.max_multiplier)
    }
}
