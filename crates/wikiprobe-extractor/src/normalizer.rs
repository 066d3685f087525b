//! Coerce loosely-keyed records into `CommandRecord`

use serde_json::{Map, Value};
use wikiprobe_domain::CommandRecord;

/// Canonical record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `CommandRecord::name`
    Name,
    /// `CommandRecord::handling_module`
    HandlingModule,
    /// `CommandRecord::critical_logic`
    CriticalLogic,
}

/// Accepted key spellings per field, highest priority first
pub const FIELD_ALIASES: [(Field, &[&str]); 3] = [
    (Field::Name, &["command_name", "name"]),
    (Field::HandlingModule, &["handling_module", "module"]),
    (Field::CriticalLogic, &["critical_logic", "logic"]),
];

/// Aliases accepted for `field`
pub fn aliases(field: Field) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[])
}

/// Build a record from an arbitrary key/value mapping
///
/// For each field the first alias present with a non-null value wins. Strings
/// are taken as-is; other values are rendered as JSON text. Fields with no
/// usable alias are empty.
pub fn normalize_record(map: &Map<String, Value>) -> CommandRecord {
    CommandRecord {
        name: lookup(map, Field::Name),
        handling_module: lookup(map, Field::HandlingModule),
        critical_logic: lookup(map, Field::CriticalLogic),
    }
}

/// Normalize a candidate list, skipping entries that are not objects
pub fn normalize_candidates(candidates: &[Value]) -> Vec<CommandRecord> {
    candidates
        .iter()
        .filter_map(Value::as_object)
        .map(normalize_record)
        .collect()
}

fn lookup(map: &Map<String, Value>, field: Field) -> String {
    aliases(field)
        .iter()
        .find_map(|key| map.get(*key).and_then(value_text))
        .unwrap_or_default()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
