//! Locate and parse a JSON object embedded in prose

use crate::types::CandidatePayload;
use serde_json::Value;
use tracing::debug;

/// Span from the first `{` to the last `}` in `text`
///
/// The scan is greedy and ignores nesting: two separate objects in the same
/// answer collapse into one span, which then usually fails to parse.
pub fn find_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the embedded JSON block of `text` into a candidate payload
///
/// Returns `None` when there is no block, the block is not valid JSON, or it
/// has no recognizable shape. Parse failures are expected for prose that
/// merely contains braces, so they are logged and swallowed.
pub fn extract_json_block(text: &str) -> Option<CandidatePayload> {
    let block = find_json_block(text)?;
    match serde_json::from_str::<Value>(block) {
        Ok(value) => CandidatePayload::classify(value),
        Err(e) => {
            debug!("Embedded JSON block did not parse: {}", e);
            None
        }
    }
}
