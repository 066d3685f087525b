//! Input and intermediate types for extraction

use serde_json::{Map, Value};
use wikiprobe_domain::CommandRecord;

/// An answer as returned by the knowledge source
///
/// Empty answers are legitimate input and extract to zero records.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawAnswer {
    /// No answer (failed or empty query)
    #[default]
    Empty,

    /// Free-form text, possibly containing JSON
    Text(String),

    /// Already-parsed payload
    Structured(Value),
}

impl From<&str> for RawAnswer {
    fn from(text: &str) -> Self {
        RawAnswer::Text(text.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(text: String) -> Self {
        RawAnswer::Text(text)
    }
}

impl From<Option<String>> for RawAnswer {
    fn from(text: Option<String>) -> Self {
        text.map_or(RawAnswer::Empty, RawAnswer::Text)
    }
}

impl From<Value> for RawAnswer {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawAnswer::Empty,
            other => RawAnswer::Structured(other),
        }
    }
}

/// A loosely-typed payload recognized inside an answer, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePayload {
    /// Object carrying a `commands` array
    Commands(Vec<Value>),

    /// Bare array of records
    Records(Vec<Value>),

    /// Single bare record
    Single(Map<String, Value>),
}

impl CandidatePayload {
    /// Classify a parsed JSON value
    ///
    /// Returns `None` for scalars, and for a `commands` key that does not hold
    /// an array.
    pub fn classify(value: Value) -> Option<Self> {
        match value {
            Value::Object(mut map) => match map.remove("commands") {
                Some(Value::Array(items)) => Some(CandidatePayload::Commands(items)),
                Some(_) => None,
                None => Some(CandidatePayload::Single(map)),
            },
            Value::Array(items) => Some(CandidatePayload::Records(items)),
            _ => None,
        }
    }

    /// Flatten into the list of record candidates
    pub fn into_candidates(self) -> Vec<Value> {
        match self {
            CandidatePayload::Commands(items) | CandidatePayload::Records(items) => items,
            CandidatePayload::Single(map) => vec![Value::Object(map)],
        }
    }
}

/// Which strategy produced an extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// JSON block embedded in text
    JsonBlock,

    /// Labeled-line prose parsing
    TextLines,

    /// Answer was already structured
    Structured,

    /// Nothing recoverable
    Nothing,
}

/// Records recovered from one answer, with the strategy that found them
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    /// Extracted records, in answer order
    pub records: Vec<CommandRecord>,

    /// Strategy that produced `records`
    pub strategy: ExtractionStrategy,
}

impl ExtractionOutcome {
    pub(crate) fn nothing() -> Self {
        Self {
            records: Vec::new(),
            strategy: ExtractionStrategy::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_answer_conversions() {
        assert_eq!(RawAnswer::from(None), RawAnswer::Empty);
        assert_eq!(RawAnswer::from(Value::Null), RawAnswer::Empty);
        assert_eq!(RawAnswer::from("x"), RawAnswer::Text("x".to_string()));
        assert_eq!(
            RawAnswer::from(json!([1])),
            RawAnswer::Structured(json!([1]))
        );
    }

    #[test]
    fn test_classify_commands_object() {
        let payload = CandidatePayload::classify(json!({"commands": [{"name": "A"}]})).unwrap();
        assert_eq!(payload, CandidatePayload::Commands(vec![json!({"name": "A"})]));
    }

    #[test]
    fn test_classify_single_object() {
        let payload = CandidatePayload::classify(json!({"name": "A"})).unwrap();
        assert_eq!(payload.into_candidates(), vec![json!({"name": "A"})]);
    }

    #[test]
    fn test_classify_array() {
        let payload = CandidatePayload::classify(json!([{"name": "A"}, 3])).unwrap();
        assert_eq!(payload.into_candidates().len(), 2);
    }

    #[test]
    fn test_classify_rejects_scalars_and_bad_commands() {
        assert!(CandidatePayload::classify(json!("text")).is_none());
        assert!(CandidatePayload::classify(json!(42)).is_none());
        assert!(CandidatePayload::classify(json!({"commands": "USER"})).is_none());
    }
}
