//! Extraction engine: answer in, command records out
//!
//! Strategies are tried from strongest to weakest:
//!
//! 1. JSON block embedded in the answer text
//! 2. Labeled-line prose parsing
//!
//! Every recognized failure degrades to an empty list. Callers detect a failed
//! extraction by checking for an empty result.

use crate::json_block::extract_json_block;
use crate::normalizer::normalize_candidates;
use crate::text_parser::parse_text_response;
use crate::types::{CandidatePayload, ExtractionOutcome, ExtractionStrategy, RawAnswer};
use serde_json::Value;
use tracing::debug;
use wikiprobe_domain::CommandRecord;

/// Extract command records from an answer
///
/// # Examples
///
/// ```
/// use wikiprobe_extractor::{extract_commands, RawAnswer};
///
/// let answer = RawAnswer::from(r#"Sure! {"commands": [{"name": "USER", "module": "auth.c"}]}"#);
/// let records = extract_commands(&answer);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].handling_module, "auth.c");
/// ```
pub fn extract_commands(answer: &RawAnswer) -> Vec<CommandRecord> {
    extract_with_strategy(answer).records
}

/// Extract command records and report which strategy produced them
pub fn extract_with_strategy(answer: &RawAnswer) -> ExtractionOutcome {
    let outcome = match answer {
        RawAnswer::Empty => ExtractionOutcome::nothing(),
        RawAnswer::Text(text) => extract_from_text(text),
        RawAnswer::Structured(value) => extract_from_value(value),
    };
    debug!(
        "Extracted {} records via {:?}",
        outcome.records.len(),
        outcome.strategy
    );
    outcome
}

fn extract_from_text(text: &str) -> ExtractionOutcome {
    if text.trim().is_empty() {
        return ExtractionOutcome::nothing();
    }

    let candidates = extract_json_block(text)
        .map(CandidatePayload::into_candidates)
        .unwrap_or_default();

    if !candidates.is_empty() {
        return ExtractionOutcome {
            records: normalize_candidates(&candidates),
            strategy: ExtractionStrategy::JsonBlock,
        };
    }

    let records = parse_text_response(text);
    if records.is_empty() {
        ExtractionOutcome::nothing()
    } else {
        ExtractionOutcome {
            records,
            strategy: ExtractionStrategy::TextLines,
        }
    }
}

fn extract_from_value(value: &Value) -> ExtractionOutcome {
    match value {
        Value::String(text) => extract_from_text(text),
        Value::Object(_) | Value::Array(_) => {
            let candidates = CandidatePayload::classify(value.clone())
                .map(CandidatePayload::into_candidates)
                .unwrap_or_default();
            ExtractionOutcome {
                records: normalize_candidates(&candidates),
                strategy: ExtractionStrategy::Structured,
            }
        }
        _ => ExtractionOutcome::nothing(),
    }
}
