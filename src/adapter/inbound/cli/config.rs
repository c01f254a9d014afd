//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn describe_clamp(value: Option<rust_decimal::Decimal>) -> String {
    value.map_or_else(|| "(none)".to_string(), |v| v.to_string())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let source = if path.exists() { "file" } else { "defaults" };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "source": source,
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Source", source);
    if !path.exists() {
        output::warning("config file not found; showing built-in defaults");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Odds");
    output::field("Mode", config.odds.mode);
    output::field("Min multiplier", describe_clamp(config.odds.min_multiplier));
    output::field("Max multiplier", describe_clamp(config.odds.max_multiplier));
    output::field("Return", format!("{}%", config.odds.return_percentage));
    Ok(())
}

/// Execute `config validate`.
///
/// Unlike the other commands, a missing file is an error here.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Path", path.display());
    Ok(())
}
