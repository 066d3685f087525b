//! Recover command records from labeled prose
//!
//! Last-resort strategy when an answer holds no usable JSON. Input such as
//!
//! ```text
//! Command: LOGIN
//! Module: auth.c
//! Logic: validates credentials against
//! the password database
//! ```
//!
//! is segmented line by line. A `Command` label opens a record, `Module` and
//! `Logic` labels fill it, unlabeled lines extend an existing logic
//! description, and blank lines close the record.

use crate::labels::{match_label, Label};
use wikiprobe_domain::CommandRecord;

/// The record currently under construction
#[derive(Debug, Default)]
struct RecordDraft {
    current: Option<CommandRecord>,
}

impl RecordDraft {
    /// Start a new record named `name`, returning the one it replaces
    fn open(&mut self, name: &str) -> Option<CommandRecord> {
        self.current
            .replace(CommandRecord::new(name, String::new(), String::new()))
    }

    /// Close the current record, leaving the draft empty
    fn take(&mut self) -> Option<CommandRecord> {
        self.current.take()
    }

    fn set_module(&mut self, value: &str) {
        if let Some(record) = self.current.as_mut() {
            record.handling_module = value.to_string();
        }
    }

    fn set_logic(&mut self, value: &str) {
        if let Some(record) = self.current.as_mut() {
            record.critical_logic = value.to_string();
        }
    }

    /// Append a continuation line; only applies once logic text exists
    fn continue_logic(&mut self, line: &str) {
        if let Some(record) = self.current.as_mut() {
            if !record.critical_logic.is_empty() {
                record.critical_logic.push(' ');
                record.critical_logic.push_str(line);
            }
        }
    }
}

/// Line-driven parser state
#[derive(Debug, Default)]
pub struct LineParser {
    draft: RecordDraft,
    records: Vec<CommandRecord>,
}

impl LineParser {
    /// Create an empty parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of input
    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();

        if line.is_empty() {
            self.close();
            return;
        }

        match match_label(line) {
            Some((Label::Command, name)) => {
                if let Some(previous) = self.draft.open(name) {
                    self.records.push(previous);
                }
            }
            Some((Label::Module, value)) => self.draft.set_module(value),
            Some((Label::Logic, value)) => self.draft.set_logic(value),
            None => self.draft.continue_logic(line),
        }
    }

    /// Close the record under construction, if any
    pub fn close(&mut self) {
        if let Some(record) = self.draft.take() {
            self.records.push(record);
        }
    }

    /// Finish parsing and return all records in input order
    pub fn finish(mut self) -> Vec<CommandRecord> {
        self.close();
        self.records
    }
}

/// Parse labeled prose into records; never fails, may return nothing
pub fn parse_text_response(text: &str) -> Vec<CommandRecord> {
    let mut parser = LineParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}
