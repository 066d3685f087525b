//! Boundary to the query provider
//!
//! Provider failures never reach the extraction logic: they are logged and
//! turned into empty answers here.

use std::fmt::Display;
use tracing::{debug, warn};
use wikiprobe_domain::QueryProvider;

/// Ask `question`, treating a failed query as an empty answer
pub(crate) fn ask_or_empty<P>(provider: &P, topic: &str, question: &str) -> String
where
    P: QueryProvider,
    P::Error: Display,
{
    match provider.ask(topic, question) {
        Ok(answer) => {
            debug!("Answer length: {} chars", answer.len());
            answer
        }
        Err(e) => {
            warn!("Query on {} failed: {}", topic, e);
            String::new()
        }
    }
}

/// Read the documentation structure, treating failure as empty
pub(crate) fn structure_or_empty<P>(provider: &P, topic: &str) -> String
where
    P: QueryProvider,
    P::Error: Display,
{
    provider.read_structure(topic).unwrap_or_else(|e| {
        warn!("Reading structure of {} failed: {}", topic, e);
        String::new()
    })
}
