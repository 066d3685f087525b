//! Questions sent to the knowledge source

/// Combined question asking for every command as JSON
pub const COMMANDS_QUESTION: &str = r#"List every command this protocol implementation supports, including standard and extension commands.
For each command, provide:
1. The command name
2. The module or function that handles it
3. Its critical handling logic (argument parsing, state checks, error handling, potential vulnerability trigger points)

Return JSON in exactly this format:
{
  "commands": [
    {
      "command_name": "command name",
      "handling_module": "handling module/function",
      "critical_logic": "critical logic description"
    }
  ]
}

Return only the JSON, with no other explanatory text."#;

/// Enumeration question for the stepwise fallback
pub const LIST_COMMANDS_QUESTION: &str = "List all commands this protocol implementation supports, including standard and extension commands. Return only the command names, comma-separated.";

/// Overview question for the implementation details section of a report
pub const IMPLEMENTATION_QUESTION: &str = "Give an overview of the overall architecture and core components of this protocol implementation, including the main modules, data flow and state machines.";

/// Detail question about a single command
///
/// The answer is expected to use `Module:` and `Logic:` labels.
pub fn detail_question(command: &str) -> String {
    format!(
        "Describe in detail the handling module and critical logic of the command {}. \
         Answer with a line starting with \"Module:\" followed by a line starting with \"Logic:\".",
        command
    )
}
