//! The keyfile: a JSON object mapping each agreed logical column name to
//! the header used in the caller's spreadsheet. Whoever maintains the
//! spreadsheet can keep human-friendly headers without the planner ever
//! learning them.
//!
//! RULES:
//!   - the keyfile must be a JSON object
//!   - every logical name must be present, mapped to a non-empty header
//!   - no unrecognised keys (exact-set match)
//!
//! The parsed result is an immutable record, built once and passed by
//! reference. Nothing else in the crate reads the keyfile format.

use crate::error::{SplitError, SplitResult};
use serde::Deserialize;
use std::collections::BTreeSet;

/// The agreed logical column names, as they appear as keyfile keys.
const LOGICAL_NAMES: [&str; 11] = [
    "assignees",
    "assignee team",
    "assignee day",
    "surprise sources",
    "surprise day",
    "task sources",
    "task number",
    "known task team",
    "surprise profile",
    "surprise distribution team",
    "surprise distribution data",
];

/// Spreadsheet column headers, one named field per logical column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMap {
    #[serde(rename = "assignees")]
    pub assignee: String,
    #[serde(rename = "assignee team")]
    pub assignee_team: String,
    #[serde(rename = "assignee day")]
    pub assignee_day: String,
    #[serde(rename = "surprise sources")]
    pub surprise_source: String,
    #[serde(rename = "surprise day")]
    pub surprise_day: String,
    #[serde(rename = "task sources")]
    pub duty_source: String,
    #[serde(rename = "task number")]
    pub duty_count: String,
    #[serde(rename = "known task team")]
    pub duty_team: String,
    #[serde(rename = "surprise profile")]
    pub duty_profile: String,
    #[serde(rename = "surprise distribution team")]
    pub profile_team: String,
    #[serde(rename = "surprise distribution data")]
    pub profile_data: String,
}

impl ColumnMap {
    /// Load and validate a keyfile from disk.
    pub fn load(path: &str) -> SplitResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SplitError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate keyfile text. The key set must match the agreed
    /// logical names exactly.
    pub fn from_json(text: &str) -> SplitResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| SplitError::Keyfile("keyfile must be a JSON object".to_string()))?;

        let expected: BTreeSet<&str> = LOGICAL_NAMES.iter().copied().collect();
        let present: BTreeSet<&str> = object.keys().map(String::as_str).collect();

        let missing: Vec<&str> = expected.difference(&present).copied().collect();
        if !missing.is_empty() {
            return Err(SplitError::Keyfile(format!(
                "missing logical names: {}",
                missing.join(", ")
            )));
        }
        let extra: Vec<&str> = present.difference(&expected).copied().collect();
        if !extra.is_empty() {
            return Err(SplitError::Keyfile(format!(
                "unrecognised keys: {}",
                extra.join(", ")
            )));
        }
        for (key, header) in object {
            match header.as_str() {
                Some(h) if !h.is_empty() => {}
                _ => {
                    return Err(SplitError::Keyfile(format!(
                        "'{key}' must map to a non-empty column header"
                    )));
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}
