pub mod builtin;

use crate::error::Plan2BoardError;
use crate::model::DeviceQuantities;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from room-type key to the device quantities a room of that
/// type gets. Loaded once, read-only for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardsTable {
    entries: BTreeMap<String, DeviceQuantities>,
}

impl StandardsTable {
    /// Look up the standard for a room-type key. Absence is a valid
    /// "no standard defined" signal, not an error; the room type is
    /// skipped downstream.
    pub fn get(&self, room_key: &str) -> Option<&DeviceQuantities> {
        self.entries.get(room_key)
    }

    pub fn room_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeviceQuantities)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a standards table from a JSON file.
pub fn load_standards(path: &Path) -> Result<StandardsTable, Plan2BoardError> {
    let content = std::fs::read_to_string(path).map_err(|e| Plan2BoardError::StandardsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table: StandardsTable =
        serde_json::from_str(&content).map_err(|e| Plan2BoardError::StandardsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_standards(&table)?;
    Ok(table)
}

/// Parse a standards table from a JSON string.
pub fn parse_standards_str(json: &str) -> Result<StandardsTable, Plan2BoardError> {
    let table: StandardsTable = serde_json::from_str(json)?;
    validate_standards(&table)?;
    Ok(table)
}

/// Validate that a standards table is well-formed.
///
/// Room keys are compared against lowercase detection keys, so a key
/// with uppercase letters could never match and is rejected.
pub fn validate_standards(table: &StandardsTable) -> Result<(), Plan2BoardError> {
    if table.is_empty() {
        return Err(Plan2BoardError::StandardsInvalid(
            "standards table must not be empty".into(),
        ));
    }

    for key in table.room_keys() {
        if key.trim().is_empty() {
            return Err(Plan2BoardError::StandardsInvalid(
                "room key must not be empty".into(),
            ));
        }
        if key != key.to_lowercase() {
            return Err(Plan2BoardError::StandardsInvalid(format!(
                "room key '{}' must be lowercase to match detection keys",
                key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_table() {
        let json = r#"{
            "kitchen": { "touch_switches": 2, "dimmer_channels": 2 },
            "office": { "touch_switches": 1 }
        }"#;
        let table = parse_standards_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("kitchen").unwrap().touch_switches, 2);
        assert_eq!(table.get("kitchen").unwrap().relay_channels, 0);
    }

    #[test]
    fn test_absent_key_is_none_not_error() {
        let json = r#"{ "kitchen": { "touch_switches": 1 } }"#;
        let table = parse_standards_str(json).unwrap();
        assert!(table.get("sauna").is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(parse_standards_str("{}").is_err());
    }

    #[test]
    fn test_uppercase_key_rejected() {
        let json = r#"{ "Kitchen": { "touch_switches": 1 } }"#;
        assert!(parse_standards_str(json).is_err());
    }

    #[test]
    fn test_negative_count_rejected_by_schema() {
        let json = r#"{ "kitchen": { "touch_switches": -1 } }"#;
        assert!(parse_standards_str(json).is_err());
    }
}
