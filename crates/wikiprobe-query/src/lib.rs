//! Wikiprobe Query Provider Layer
//!
//! Implementations of the `QueryProvider` trait from `wikiprobe-domain`.
//!
//! # Architecture
//!
//! The knowledge source is reached through a single blocking call per
//! question. Transport concerns (timeouts, retries) belong to the provider;
//! the extraction pipeline only ever sees text or an error.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `TranscriptProvider`: Replays answers recorded in a TOML transcript
//!
//! # Examples
//!
//! ```
//! use wikiprobe_query::MockProvider;
//! use wikiprobe_domain::QueryProvider;
//!
//! let provider = MockProvider::new("Command: NOOP");
//! let answer = provider.ask("proftpd/proftpd", "any question").unwrap();
//! assert_eq!(answer, "Command: NOOP");
//! ```

#![warn(missing_docs)]

pub mod transcript;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use wikiprobe_domain::QueryProvider;

pub use transcript::{Transcript, TranscriptEntry, TranscriptProvider};

/// Errors that can occur while querying the knowledge source
#[derive(Error, Debug)]
pub enum QueryError {
    /// Network or transport error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Transcript or fixture could not be loaded
    #[error("Transcript error: {0}")]
    Transcript(String),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock query provider for deterministic testing
///
/// Returns pre-configured answers without contacting any knowledge source.
/// Clones share answers, call count and the question log.
///
/// # Examples
///
/// ```
/// use wikiprobe_query::MockProvider;
/// use wikiprobe_domain::QueryProvider;
///
/// let mut provider = MockProvider::new("");
/// provider.add_response("list commands", "USER, PASS");
/// provider.add_error("describe USER");
///
/// assert_eq!(provider.ask("repo", "list commands").unwrap(), "USER, PASS");
/// assert!(provider.ask("repo", "describe USER").is_err());
/// assert_eq!(provider.ask("repo", "unknown").unwrap(), "");
/// assert_eq!(provider.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    structure: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    errors: Arc<Mutex<HashSet<String>>>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed answer for all questions
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            structure: String::new(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashSet::new())),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the documentation structure returned by `read_structure`
    pub fn with_structure(mut self, structure: impl Into<String>) -> Self {
        self.structure = structure.into();
        self
    }

    /// Add a specific answer for a given question
    pub fn add_response(&mut self, question: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(question.into(), response.into());
    }

    /// Configure to fail for a specific question
    pub fn add_error(&mut self, question: impl Into<String>) {
        lock(&self.errors).insert(question.into());
    }

    /// Get the number of times `ask` was called
    pub fn call_count(&self) -> usize {
        lock(&self.questions).len()
    }

    /// Questions asked so far, in order
    pub fn questions(&self) -> Vec<String> {
        lock(&self.questions).clone()
    }

    /// Reset the question log
    pub fn reset_call_count(&self) {
        lock(&self.questions).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("")
    }
}

impl QueryProvider for MockProvider {
    type Error = QueryError;

    fn ask(&self, _topic: &str, question: &str) -> Result<String, Self::Error> {
        lock(&self.questions).push(question.to_string());

        if lock(&self.errors).contains(question) {
            return Err(QueryError::Communication("Mock error".to_string()));
        }

        let responses = lock(&self.responses);
        Ok(responses
            .get(question)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone()))
    }

    fn read_structure(&self, _topic: &str) -> Result<String, Self::Error> {
        Ok(self.structure.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.ask("owner/repo", "any question");
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::new("fallback");
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.ask("r", "hello").unwrap(), "world");
        assert_eq!(provider.ask("r", "foo").unwrap(), "bar");
        assert_eq!(provider.ask("r", "unknown").unwrap(), "fallback");
    }

    #[test]
    fn test_mock_provider_call_count_and_log() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.ask("r", "first").unwrap();
        provider.ask("r", "second").unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.questions(), vec!["first", "second"]);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad question");

        let result = provider.ask("r", "bad question");
        assert!(matches!(result, Err(QueryError::Communication(_))));
        // Failed questions are still counted
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_structure() {
        let provider = MockProvider::new("").with_structure("1. Overview");
        assert_eq!(provider.read_structure("r").unwrap(), "1. Overview");
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.ask("r", "q").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
