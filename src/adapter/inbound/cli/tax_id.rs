//! Handlers for `tax-id check` and `tax-id format`.

use serde_json::json;
use tracing::info;

use super::output;
use crate::domain::{classify_tax_id, format_tax_id_for_display, normalize_digits};
use crate::error::{Error, Result};

/// Execute `tax-id check`.
///
/// An invalid value is reported and returned as an error so the process
/// exits non-zero.
pub fn execute_check(raw: &str) -> Result<()> {
    let tax_id = classify_tax_id(raw);
    info!(kind = %tax_id.kind(), tax_id = %tax_id.redacted(), "tax id classified");

    if output::is_json() {
        output::json_output(json!({
            "command": "tax-id.check",
            "valid": tax_id.is_valid(),
            "kind": tax_id.kind(),
            "formatted": tax_id.formatted(),
            "rejection": tax_id.rejection().map(ToString::to_string),
        }));
    }

    if let Some(rejection) = tax_id.rejection() {
        return Err(Error::InvalidTaxId(rejection.clone()));
    }

    if !output::is_json() {
        output::success(&format!("valid {}", tax_id.kind()));
        if let Some(formatted) = tax_id.formatted() {
            output::field("Formatted", formatted);
        }
    }
    Ok(())
}

/// Execute `tax-id format`.
pub fn execute_format(raw: &str) -> Result<()> {
    let formatted = format_tax_id_for_display(raw);

    if output::is_json() {
        output::json_output(json!({
            "command": "tax-id.format",
            "formatted": formatted,
            "digits": normalize_digits(&formatted).len(),
        }));
        return Ok(());
    }

    println!("{formatted}");
    Ok(())
}
