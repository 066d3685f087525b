//! Command record - the canonical output unit of extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// A protocol command recovered from a knowledge source answer
///
/// All three fields are always present. An unrecoverable value is stored as an
/// empty string, so "missing" and "empty" are the same observable state.
///
/// The serialized key names match the report format consumed by the seed
/// tooling (`command_name`, `handling_module`, `critical_logic`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Command or method identifier (e.g. `STOR`, `PROPFIND`)
    #[serde(rename = "command_name", default)]
    pub name: String,

    /// Module or function that handles the command
    #[serde(default)]
    pub handling_module: String,

    /// Free-text description of the command's key behavior
    #[serde(default)]
    pub critical_logic: String,
}

impl CommandRecord {
    /// Create a new record
    ///
    /// # Examples
    ///
    /// ```
    /// use wikiprobe_domain::CommandRecord;
    ///
    /// let record = CommandRecord::new("STOR", "mod_xfer.c", "opens the target file");
    /// assert_eq!(record.name, "STOR");
    /// assert!(!record.is_blank());
    /// ```
    pub fn new(
        name: impl Into<String>,
        handling_module: impl Into<String>,
        critical_logic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handling_module: handling_module.into(),
            critical_logic: critical_logic.into(),
        }
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.handling_module.is_empty() && self.critical_logic.is_empty()
    }
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.handling_module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_keys() {
        let record = CommandRecord::new("LOGIN", "auth.c", "checks password");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["command_name"], "LOGIN");
        assert_eq!(json["handling_module"], "auth.c");
        assert_eq!(json["critical_logic"], "checks password");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_empty_fields_are_still_serialized() {
        let json = serde_json::to_value(CommandRecord::default()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["command_name"], "");
        assert_eq!(obj["handling_module"], "");
        assert_eq!(obj["critical_logic"], "");
    }

    #[test]
    fn test_deserialize_missing_fields_as_empty() {
        let record: CommandRecord = serde_json::from_str(r#"{"command_name": "QUIT"}"#).unwrap();
        assert_eq!(record, CommandRecord::new("QUIT", "", ""));
    }

    #[test]
    fn test_is_blank() {
        assert!(CommandRecord::default().is_blank());
        assert!(!CommandRecord::new("", "", "x").is_blank());
    }

    #[test]
    fn test_display() {
        let record = CommandRecord::new("RETR", "xfer_retr", "");
        assert_eq!(record.to_string(), "RETR -> xfer_retr");
    }
}
