//! Handler for `rooms`: evaluate every room in a JSON listing.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tabled::{Table, Tabled};
use tracing::{debug, warn};

use super::command::RoomsArgs;
use super::output;
use crate::domain::{format_brl, round_tenths, ProbabilityMode, RoomEconomics, RoomOdds};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

const UNAVAILABLE: &str = "unavailable";
const NO_FIGURE: &str = "-";

/// One entry of a room listing file.
#[derive(Debug, Deserialize)]
struct RoomListing {
    #[serde(default, alias = "nome")]
    name: Option<String>,
    #[serde(flatten)]
    odds: RoomOdds,
    #[serde(default, alias = "jogadores_atuais")]
    participants: u32,
    #[serde(default, alias = "porcentagem_retorno")]
    return_percentage: Option<Decimal>,
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "Room")]
    name: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Seats")]
    seats: String,
    #[tabled(rename = "Fill")]
    fill: String,
    #[tabled(rename = "Prize")]
    prize: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
}

fn read_listing(path: &Path) -> Result<Vec<RoomListing>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn room_label(index: usize, listing: &RoomListing) -> String {
    listing
        .name
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn seats(listing: &RoomListing) -> String {
    format!(
        "{}/{}",
        listing.participants,
        listing.odds.participant_limit()
    )
}

fn row(label: String, listing: &RoomListing, economics: &RoomEconomics) -> RoomRow {
    RoomRow {
        name: label,
        stake: format_brl(listing.odds.stake()),
        seats: seats(listing),
        fill: format!("{}%", round_tenths(economics.fill_percentage)),
        prize: format_brl(economics.prize),
        multiplier: economics
            .multiplier
            .map_or_else(|| UNAVAILABLE.to_string(), |m| format!("{m}x")),
    }
}

/// Row for a room whose figures could not be computed at all.
fn unavailable_row(label: String, listing: &RoomListing) -> RoomRow {
    RoomRow {
        name: label,
        stake: format_brl(listing.odds.stake()),
        seats: seats(listing),
        fill: NO_FIGURE.to_string(),
        prize: NO_FIGURE.to_string(),
        multiplier: UNAVAILABLE.to_string(),
    }
}

/// Execute `rooms`.
pub fn execute(args: &RoomsArgs, config: &Config) -> Result<()> {
    let mode: ProbabilityMode = args.mode.unwrap_or(config.odds.mode);
    let listings = read_listing(&args.file)?;
    debug!(path = %args.file.display(), rooms = listings.len(), "loaded room listing");

    let mut rows = Vec::with_capacity(listings.len());
    let mut records = Vec::with_capacity(listings.len());
    let mut rows_unavailable = 0usize;

    for (index, listing) in listings.iter().enumerate() {
        let label = room_label(index, listing);
        let odds = config.odds.apply(listing.odds.clone());
        let return_percentage = listing
            .return_percentage
            .unwrap_or(config.odds.return_percentage);
        match RoomEconomics::evaluate(&odds, listing.participants, return_percentage, mode) {
            Ok(economics) => {
                if !economics.odds_available() {
                    warn!(room = %label, "odds unavailable");
                    rows_unavailable += 1;
                }
                records.push(json!({
                    "room": label,
                    "economics": economics,
                }));
                rows.push(row(label, listing, &economics));
            }
            Err(e) => {
                warn!(room = %label, error = %e, "room figures unavailable");
                rows_unavailable += 1;
                records.push(json!({
                    "room": label,
                    "error": e.to_string(),
                }));
                rows.push(unavailable_row(label, listing));
            }
        }
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "rooms",
            "mode": mode,
            "rooms": records,
        }));
        return Ok(());
    }

    output::section(&format!("Rooms ({mode})"));
    if rows.is_empty() {
        output::note("(no rooms)");
        return Ok(());
    }
    output::lines(&Table::new(rows).to_string());
    if rows_unavailable > 0 {
        output::hint(&format!(
            "{rows_unavailable} room(s) have no computable odds in {mode} mode"
        ));
    }
    Ok(())
}
