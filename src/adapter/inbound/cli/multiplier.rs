//! Handlers for `multiplier` and `pool-share`.

use std::fs;

use serde_json::json;
use tracing::{debug, info};

use super::command::{MultiplierArgs, PoolShareArgs};
use super::output;
use crate::domain::{compute_multiplier, compute_pool_share, format_brl, to_cents, RoomOdds};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn room_from_args(args: &MultiplierArgs) -> Result<RoomOdds> {
    let mut odds = match &args.room {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            debug!(path = %path.display(), "loaded room record");
            serde_json::from_str::<RoomOdds>(&content)?
        }
        // clap enforces these when no room file is given
        None => RoomOdds::new(
            args.stake,
            args.limit,
            args.base_rate.unwrap_or_default(),
            args.probability_primary.unwrap_or_default(),
            args.probability_secondary.unwrap_or_default(),
        ),
    };

    if let Some(force) = args.force {
        odds = odds.with_force_adjustment(force);
    }
    if let Some(min) = args.min {
        odds = odds.with_min_multiplier(min);
    }
    if let Some(max) = args.max {
        odds = odds.with_max_multiplier(max);
    }
    Ok(odds)
}

/// Execute `multiplier`.
pub fn execute(args: &MultiplierArgs, config: &Config) -> Result<()> {
    let mode = args.mode.unwrap_or(config.odds.mode);
    let odds = config.odds.apply(room_from_args(args)?);
    let multiplier = compute_multiplier(&odds, mode)?;

    info!(%mode, %multiplier, "multiplier computed");

    if output::is_json() {
        output::json_output(json!({
            "command": "multiplier",
            "mode": mode,
            "multiplier": multiplier,
            "min_multiplier": odds.min_multiplier(),
            "max_multiplier": odds.max_multiplier(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{multiplier}");
        return Ok(());
    }

    output::section("Multiplier");
    output::field("Mode", mode);
    output::field("Multiplier", output::highlight(format!("{multiplier}x")));
    if let Some(min) = odds.min_multiplier() {
        output::field("Min clamp", min);
    }
    if let Some(max) = odds.max_multiplier() {
        output::field("Max clamp", max);
    }
    Ok(())
}

/// Execute `pool-share`.
pub fn execute_pool_share(args: &PoolShareArgs) -> Result<()> {
    let share = compute_pool_share(args.stake, args.limit, args.return_percentage)?;

    if output::is_json() {
        let cents = to_cents(share)?;
        output::json_output(json!({
            "command": "pool-share",
            "stake": args.stake,
            "limit": args.limit,
            "return_percentage": args.return_percentage,
            "pool_share": share,
            "pool_share_cents": cents,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{share}");
        return Ok(());
    }

    output::section("Pool share");
    output::field("Stake", format_brl(args.stake));
    output::field("Seats", args.limit);
    output::field("Return", format!("{}%", args.return_percentage));
    output::field("Pool share", output::highlight(format_brl(share)));
    Ok(())
}
