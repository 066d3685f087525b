//! Transcript Provider
//!
//! Replays answers recorded from an earlier session, so an analysis can be
//! re-run offline and deterministically.
//!
//! # Format
//!
//! ```toml
//! structure = "1. Overview\n2. Command dispatch"
//!
//! [[answers]]
//! match = "comma-separated"
//! text = "USER, PASS, STOR"
//!
//! [[answers]]
//! match = "command STOR."
//! topic = "proftpd/proftpd"
//! text = "Module: mod_xfer.c\nLogic: opens the upload target"
//!
//! [[answers]]
//! match = "command PASS."
//! fail = true
//! ```
//!
//! Each question is answered by the first entry whose `match` text occurs in
//! the question (and whose `topic`, when given, equals the asked topic).
//! Unmatched questions get an empty answer. Matching is by substring, so end
//! a command name with the period that closes it in the question; otherwise
//! `command STOR` also answers the question about `STORE`.

use crate::QueryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use wikiprobe_domain::QueryProvider;

/// A recorded session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// Documentation structure returned by `read_structure`
    #[serde(default)]
    pub structure: String,

    /// Recorded answers, tried in order
    #[serde(default)]
    pub answers: Vec<TranscriptEntry>,
}

/// One recorded answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Substring of the question this entry answers
    #[serde(rename = "match")]
    pub pattern: String,

    /// Restrict the entry to one topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Recorded answer text
    #[serde(default)]
    pub text: String,

    /// Replay a failed query instead of an answer
    #[serde(default)]
    pub fail: bool,
}

impl TranscriptEntry {
    fn matches(&self, topic: &str, question: &str) -> bool {
        let topic_ok = self.topic.as_deref().map_or(true, |t| t == topic);
        topic_ok && question.contains(&self.pattern)
    }
}

impl Transcript {
    /// Parse a transcript from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, QueryError> {
        toml::from_str(toml_str)
            .map_err(|e| QueryError::Transcript(format!("Failed to parse TOML: {}", e)))
    }
}

/// Query provider backed by a `Transcript`
#[derive(Debug, Clone)]
pub struct TranscriptProvider {
    transcript: Transcript,
}

impl TranscriptProvider {
    /// Create a provider from an in-memory transcript
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }

    /// Load a transcript file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            QueryError::Transcript(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Self::new(Transcript::from_toml(&contents)?))
    }

    /// Number of recorded answers
    pub fn len(&self) -> usize {
        self.transcript.answers.len()
    }

    /// True when the transcript holds no answers
    pub fn is_empty(&self) -> bool {
        self.transcript.answers.is_empty()
    }
}

impl QueryProvider for TranscriptProvider {
    type Error = QueryError;

    fn ask(&self, topic: &str, question: &str) -> Result<String, Self::Error> {
        match self
            .transcript
            .answers
            .iter()
            .find(|entry| entry.matches(topic, question))
        {
            Some(entry) if entry.fail => Err(QueryError::Communication(format!(
                "recorded failure for '{}'",
                entry.pattern
            ))),
            Some(entry) => Ok(entry.text.clone()),
            None => {
                debug!("No recorded answer for question on {}", topic);
                Ok(String::new())
            }
        }
    }

    fn read_structure(&self, _topic: &str) -> Result<String, Self::Error> {
        Ok(self.transcript.structure.clone())
    }
}
