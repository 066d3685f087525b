//! Stepwise fallback: one question per command
//!
//! Used when the combined question produced no records. Runs in two phases:
//!
//! 1. **Enumerate** - ask for a comma-separated list of command names
//! 2. **Detail** - ask about each name in turn and extract one record per answer
//!
//! Queries are issued sequentially. A failed or empty detail answer drops that
//! command; it is not retried.

use crate::cancel::CancelFlag;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::labels::{find_logic, find_module};
use crate::prompt::{detail_question, LIST_COMMANDS_QUESTION};
use crate::query::ask_or_empty;
use std::fmt::Display;
use tracing::{debug, info};
use wikiprobe_domain::{CommandRecord, QueryProvider};

/// Split an enumeration answer into command names
///
/// Splits on ASCII and full-width commas and on newlines, trims each token,
/// drops empty tokens and tokens longer than `max_name_chars`, and keeps at
/// most `max_commands` names.
pub fn parse_command_list(answer: &str, max_name_chars: usize, max_commands: usize) -> Vec<String> {
    answer
        .split([',', '，', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.chars().count() <= max_name_chars)
        .take(max_commands)
        .map(str::to_string)
        .collect()
}

/// Build the record for `command` from its detail answer
///
/// Returns `None` for a blank answer. Without a logic label, the first
/// `fallback_chars` characters of the answer stand in for the logic.
pub fn extract_single_command(
    command: &str,
    answer: &str,
    fallback_chars: usize,
) -> Option<CommandRecord> {
    if answer.trim().is_empty() {
        return None;
    }

    let handling_module = find_module(answer).unwrap_or_default();
    let critical_logic = match find_logic(answer) {
        Some(logic) => logic.to_string(),
        None => answer.chars().take(fallback_chars).collect(),
    };

    Some(CommandRecord::new(command, handling_module, critical_logic))
}

/// Drives the enumerate-then-detail query sequence for one topic
pub struct StepwiseFallback<'a, P> {
    provider: &'a P,
    config: &'a ExtractorConfig,
    cancel: &'a CancelFlag,
}

impl<'a, P> StepwiseFallback<'a, P>
where
    P: QueryProvider,
    P::Error: Display,
{
    /// Create a controller over `provider`
    pub fn new(provider: &'a P, config: &'a ExtractorConfig, cancel: &'a CancelFlag) -> Self {
        Self {
            provider,
            config,
            cancel,
        }
    }

    /// Run both phases for `topic`
    ///
    /// Records follow enumeration order; duplicates are kept. Returns
    /// `Cancelled` if the cancel flag is raised before any query, discarding
    /// what was collected so far.
    pub fn run(&self, topic: &str) -> Result<Vec<CommandRecord>, ExtractorError> {
        let names = self.enumerate(topic)?;
        info!("Stepwise fallback: {} command names to detail", names.len());

        let mut records = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            self.cancel.check()?;
            debug!("Detailing command {}/{}: {}", idx + 1, names.len(), name);

            let answer = ask_or_empty(self.provider, topic, &detail_question(name));
            match extract_single_command(name, &answer, self.config.logic_fallback_chars) {
                Some(record) => records.push(record),
                None => debug!("No detail for command {}, skipping", name),
            }
        }

        Ok(records)
    }

    /// Phase 1: ask for the command names
    pub fn enumerate(&self, topic: &str) -> Result<Vec<String>, ExtractorError> {
        self.cancel.check()?;
        let answer = ask_or_empty(self.provider, topic, LIST_COMMANDS_QUESTION);
        Ok(parse_command_list(
            &answer,
            self.config.max_command_name_chars,
            self.config.max_stepwise_commands,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiprobe_query::MockProvider;

    #[test]
    fn test_parse_command_list_separators() {
        let names = parse_command_list("USER, PASS，STOR\nRETR\n\n , QUIT", 50, 20);
        assert_eq!(names, vec!["USER", "PASS", "STOR", "RETR", "QUIT"]);
    }

    #[test]
    fn test_parse_command_list_drops_long_tokens() {
        let prose = "a".repeat(51);
        let exactly = "b".repeat(50);
        let answer = format!("USER, {}, {}", prose, exactly);
        let names = parse_command_list(&answer, 50, 20);
        assert_eq!(names, vec!["USER".to_string(), exactly]);
    }

    #[test]
    fn test_parse_command_list_counts_characters() {
        // 20 CJK characters are 60 bytes but well under the limit
        let name = "命".repeat(20);
        assert_eq!(parse_command_list(&name, 50, 20), vec![name]);
    }

    #[test]
    fn test_parse_command_list_cap() {
        let answer: Vec<String> = (0..30).map(|i| format!("CMD{}", i)).collect();
        let names = parse_command_list(&answer.join(","), 50, 20);
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], "CMD0");
        assert_eq!(names[19], "CMD19");
    }

    #[test]
    fn test_extract_single_with_labels() {
        let answer = "Module: mod_xfer.c\nLogic: opens the file\nchecks quota\n\nMore text";
        let record = extract_single_command("STOR", answer, 500).unwrap();
        assert_eq!(
            record,
            CommandRecord::new("STOR", "mod_xfer.c", "opens the file\nchecks quota")
        );
    }

    #[test]
    fn test_extract_single_chinese_labels() {
        let answer = "处理模块：mod_auth.c\n关键逻辑：校验密码";
        let record = extract_single_command("PASS", answer, 500).unwrap();
        assert_eq!(record, CommandRecord::new("PASS", "mod_auth.c", "校验密码"));
    }

    #[test]
    fn test_extract_single_logic_fallback_truncates() {
        let answer = "x".repeat(800);
        let record = extract_single_command("SITE", &answer, 500).unwrap();
        assert_eq!(record.handling_module, "");
        assert_eq!(record.critical_logic.chars().count(), 500);
    }

    #[test]
    fn test_extract_single_ignores_labels_in_prose() {
        let answer = "USER is dispatched by the core module: it looks up the handler table.\nModule: mod_auth.c\nLogic: stores the user name";
        let record = extract_single_command("USER", answer, 500).unwrap();
        assert_eq!(
            record,
            CommandRecord::new("USER", "mod_auth.c", "stores the user name")
        );

        let answer = "STOR follows this logic: open, write, close.\nModule: mod_xfer.c\nLogic: opens the upload target\n\nNotes";
        let record = extract_single_command("STOR", answer, 500).unwrap();
        assert_eq!(
            record,
            CommandRecord::new("STOR", "mod_xfer.c", "opens the upload target")
        );
    }

    #[test]
    fn test_extract_single_crlf_answer() {
        let answer = "Module: mod_xfer.c\r\nLogic: opens the file\r\n\r\nSee also RETR";
        let record = extract_single_command("STOR", answer, 500).unwrap();
        assert_eq!(record, CommandRecord::new("STOR", "mod_xfer.c", "opens the file"));
    }

    #[test]
    fn test_extract_single_blank_answer() {
        assert!(extract_single_command("NOOP", "", 500).is_none());
        assert!(extract_single_command("NOOP", "  \n ", 500).is_none());
    }

    fn provider() -> MockProvider {
        let mut provider = MockProvider::new("");
        provider.add_response(LIST_COMMANDS_QUESTION, "LOGIN, STOR, RETR");
        provider.add_response(
            detail_question("LOGIN"),
            "Module: auth.c\nLogic: validates credentials",
        );
        provider.add_response(
            detail_question("STOR"),
            "Module: xfer.c\nLogic: writes upload",
        );
        provider.add_response(
            detail_question("RETR"),
            "Module: xfer.c\nLogic: streams download",
        );
        provider
    }

    #[test]
    fn test_run_in_enumeration_order() {
        let provider = provider();
        let config = ExtractorConfig::default();
        let cancel = CancelFlag::new();

        let records = StepwiseFallback::new(&provider, &config, &cancel)
            .run("test/repo")
            .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["LOGIN", "STOR", "RETR"]);
        assert_eq!(records[1].critical_logic, "writes upload");
        assert_eq!(provider.call_count(), 4);
    }

    #[test]
    fn test_run_skips_failed_detail() {
        let mut provider = provider();
        provider.add_error(detail_question("STOR"));
        let config = ExtractorConfig::default();
        let cancel = CancelFlag::new();

        let records = StepwiseFallback::new(&provider, &config, &cancel)
            .run("test/repo")
            .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["LOGIN", "RETR"]);
    }

    #[test]
    fn test_run_with_empty_enumeration() {
        let provider = MockProvider::new("");
        let config = ExtractorConfig::default();
        let cancel = CancelFlag::new();

        let records = StepwiseFallback::new(&provider, &config, &cancel)
            .run("test/repo")
            .unwrap();
        assert!(records.is_empty());
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_run_respects_configured_cap() {
        let provider = provider();
        let config = ExtractorConfig {
            max_stepwise_commands: 2,
            ..ExtractorConfig::default()
        };
        let cancel = CancelFlag::new();

        let records = StepwiseFallback::new(&provider, &config, &cancel)
            .run("test/repo")
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(provider.call_count(), 3);
    }

    #[test]
    fn test_cancelled_before_start_issues_no_queries() {
        let provider = provider();
        let config = ExtractorConfig::default();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = StepwiseFallback::new(&provider, &config, &cancel).run("test/repo");
        assert!(matches!(result, Err(ExtractorError::Cancelled)));
        assert_eq!(provider.call_count(), 0);
    }
}
