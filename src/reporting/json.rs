use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes any report value as pretty JSON for machine consumption.
///
/// # Errors
/// Returns error if the value cannot be represented as JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}
