//! Field labels recognized in prose answers
//!
//! Answers come back in English or Chinese. English labels match
//! case-insensitively, Chinese labels exactly; either colon width is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

/// A labeled line kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// `Command:` / `命令：`
    Command,
    /// `Module:` / `处理模块：`
    Module,
    /// `Logic:` / `关键逻辑：`
    Logic,
}

static COMMAND_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?i:command)|命令)[：:]\s*(.+)$").unwrap()
});

static MODULE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?i:module)|处理模块)[：:]\s*(.+)$").unwrap()
});

static LOGIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?i:logic)|关键逻辑)[：:]\s*(.+)$").unwrap()
});

// Detail answers are searched as a whole rather than line by line. Labels
// must open a line; a blank line (LF or CRLF) ends the logic text.
static MODULE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\S\n]*(?:(?i:module)|处理模块)[：:][^\S\n]*([^\r\n]+)").unwrap()
});

static LOGIC_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ms)^[^\S\n]*(?:(?i:logic)|关键逻辑)[：:]\s*(.+?)(?:\r?\n[^\S\n]*\r?\n|\z)",
    )
    .unwrap()
});

/// Match a trimmed line against the labels, in `Command`, `Module`, `Logic`
/// order, returning the label and its trimmed value
pub fn match_label(line: &str) -> Option<(Label, &str)> {
    [
        (Label::Command, &*COMMAND_LINE),
        (Label::Module, &*MODULE_LINE),
        (Label::Logic, &*LOGIC_LINE),
    ]
    .into_iter()
    .find_map(|(label, re)| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|value| (label, value.as_str().trim()))
    })
}

/// Text after the first module label in `answer`, up to end of line
pub fn find_module(answer: &str) -> Option<&str> {
    MODULE_FIELD
        .captures(answer)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Text after the first logic label in `answer`, up to the next blank line
/// or the end of the answer
pub fn find_logic(answer: &str) -> Option<&str> {
    LOGIC_FIELD
        .captures(answer)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels_any_case() {
        assert_eq!(match_label("Command: USER"), Some((Label::Command, "USER")));
        assert_eq!(match_label("COMMAND:USER"), Some((Label::Command, "USER")));
        assert_eq!(match_label("module: auth.c"), Some((Label::Module, "auth.c")));
        assert_eq!(match_label("Logic:  checks  "), Some((Label::Logic, "checks")));
    }

    #[test]
    fn test_chinese_labels_and_full_width_colon() {
        assert_eq!(match_label("命令：USER"), Some((Label::Command, "USER")));
        assert_eq!(match_label("处理模块: mod_auth.c"), Some((Label::Module, "mod_auth.c")));
        assert_eq!(match_label("关键逻辑：校验密码"), Some((Label::Logic, "校验密码")));
    }

    #[test]
    fn test_full_width_colon_with_english_label() {
        assert_eq!(match_label("Command：PASS"), Some((Label::Command, "PASS")));
    }

    #[test]
    fn test_label_without_value_does_not_match() {
        assert_eq!(match_label("Command:"), None);
    }

    #[test]
    fn test_label_must_start_line() {
        assert_eq!(match_label("The Command: USER"), None);
        assert_eq!(match_label("Commands: USER"), None);
    }

    #[test]
    fn test_find_module_single_line() {
        let answer = "Overview\nModule: mod_xfer.c  \nLogic: writes";
        assert_eq!(find_module(answer), Some("mod_xfer.c"));
    }

    #[test]
    fn test_find_logic_stops_at_blank_line() {
        let answer = "处理模块：mod_xfer.c\n关键逻辑：opens file\nchecks quota\n\nSee also RETR";
        assert_eq!(find_logic(answer), Some("opens file\nchecks quota"));
    }

    #[test]
    fn test_find_fields_ignore_labels_inside_prose() {
        let answer = "Handled by the core module: see dispatch.c\nThis logic: is shared\n  Module: mod_auth.c\nLogic: checks the password";
        assert_eq!(find_module(answer), Some("mod_auth.c"));
        assert_eq!(find_logic(answer), Some("checks the password"));
    }

    #[test]
    fn test_find_logic_stops_at_crlf_blank_line() {
        let answer = "Module: mod_xfer.c\r\nLogic: opens the file\r\n \r\nSee also RETR";
        assert_eq!(find_module(answer), Some("mod_xfer.c"));
        assert_eq!(find_logic(answer), Some("opens the file"));
    }

    #[test]
    fn test_find_logic_to_end() {
        assert_eq!(find_logic("logic: streams data"), Some("streams data"));
        assert_eq!(find_logic("no labels here"), None);
    }
}
