//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wikiprobe CLI - Recover protocol command records from knowledge source answers.
#[derive(Debug, Parser)]
#[command(name = "wikiprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "WIKIPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (command names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract command records from a saved answer
    Extract(ExtractArgs),

    /// Analyze a repository by replaying a recorded transcript
    Analyze(AnalyzeArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File holding the raw answer (reads stdin when omitted)
    pub input: Option<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Repository name (format: owner/repo)
    pub repo: String,

    /// Transcript of recorded answers (TOML)
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Report output path (default: <owner>_<repo>_analysis.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "wikiprobe",
            "analyze",
            "proftpd/proftpd",
            "--transcript",
            "session.toml",
            "-o",
            "out/report.json",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.repo, "proftpd/proftpd");
                assert_eq!(args.transcript, PathBuf::from("session.toml"));
                assert_eq!(args.output, Some(PathBuf::from("out/report.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, CliFormat::Table);
    }

    #[test]
    fn test_parse_extract_from_stdin_as_json() {
        let cli = Cli::parse_from(["wikiprobe", "--format", "json", "extract"]);
        assert!(matches!(cli.command, Command::Extract(ExtractArgs { input: None })));
        assert_eq!(cli.format, CliFormat::Json);
    }
}
