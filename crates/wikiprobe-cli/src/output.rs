//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use wikiprobe_domain::CommandRecord;
use wikiprobe_extractor::AnalysisReport;

/// Longest logic excerpt shown in table cells.
const LOGIC_PREVIEW_CHARS: usize = 60;

/// Commands listed in an analysis summary.
const SUMMARY_COMMANDS: usize = 5;

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted records.
    pub fn format_records(&self, records: &[CommandRecord]) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            CliFormat::Table => Ok(self.format_records_table(records)),
            CliFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[CommandRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No commands found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Command", "Module", "Logic"]);

        for (idx, record) in records.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                record.name.clone(),
                record.handling_module.clone(),
                preview(&record.critical_logic),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the summary printed after an analysis.
    pub fn format_summary(
        &self,
        report: &AnalysisReport,
        saved_to: &Path,
        processing_time_ms: u64,
    ) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            CliFormat::Quiet => Ok(saved_to.display().to_string()),
            CliFormat::Table => {
                let rule = "=".repeat(60);
                let mut lines = vec![
                    self.success(&format!("Report saved to {}", saved_to.display())),
                    rule.clone(),
                    format!("Target: {}", self.colorize(&report.target, "cyan")),
                    format!("Commands extracted: {}", report.command_count()),
                    format!("Processing time: {}ms", processing_time_ms),
                ];

                if report.custom_commands.is_empty() {
                    lines.push(self.warning("No commands could be recovered"));
                } else {
                    lines.push(format!("First {}:", SUMMARY_COMMANDS.min(report.command_count())));
                    for (idx, record) in report.custom_commands.iter().take(SUMMARY_COMMANDS).enumerate() {
                        lines.push(format!("  {}. {}", idx + 1, record));
                    }
                }
                lines.push(rule);

                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First line of `logic`, cut to the preview width.
fn preview(logic: &str) -> String {
    let first_line = logic.lines().next().unwrap_or_default();
    if first_line.chars().count() <= LOGIC_PREVIEW_CHARS && !logic.contains('\n') {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(LOGIC_PREVIEW_CHARS).collect();
    format!("{}…", cut)
}
