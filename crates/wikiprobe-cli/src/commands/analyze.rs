//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::PathBuf;
use tracing::info;
use wikiprobe_extractor::{default_report_path, AnalysisSession, ExtractorConfig};
use wikiprobe_query::TranscriptProvider;

/// Execute the analyze command.
pub fn execute_analyze(
    args: AnalyzeArgs,
    config: ExtractorConfig,
    formatter: &Formatter,
) -> Result<()> {
    let (_, saved_to, summary) = run_analysis(args, config, formatter)?;
    info!("Analysis written to {}", saved_to.display());
    println!("{}", summary);
    Ok(())
}

/// Run the analysis and save the report, returning the command count, the
/// report path and the formatted summary.
fn run_analysis(
    args: AnalyzeArgs,
    config: ExtractorConfig,
    formatter: &Formatter,
) -> Result<(usize, PathBuf, String)> {
    if !args.repo.contains('/') {
        return Err(CliError::InvalidInput(format!(
            "Repository must be in owner/repo form, got '{}'",
            args.repo
        )));
    }

    let provider = TranscriptProvider::load(&args.transcript)?;
    info!(
        "Replaying {} recorded answer(s) from {}",
        provider.len(),
        args.transcript.display()
    );

    let session = AnalysisSession::new(provider, config);
    let run = session.run(&args.repo)?;
    let report = run.report;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_report_path(&args.repo)));
    report.save(&output)?;

    let summary = formatter.format_summary(&report, &output, run.processing_time_ms)?;
    Ok((report.command_count(), output, summary))
}
