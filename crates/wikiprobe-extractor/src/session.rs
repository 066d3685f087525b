//! Analysis session: from repository name to report
//!
//! One run issues, in order:
//!
//! 1. a documentation structure lookup (optional, result kept as raw data)
//! 2. the combined command question, falling back to the stepwise protocol
//!    when nothing can be extracted from its answer
//! 3. the implementation overview question
//!
//! All per-run data lives in a `SessionState` returned to the caller, so one
//! session can analyze several repositories without cross-contamination.

use crate::cancel::CancelFlag;
use crate::config::ExtractorConfig;
use crate::engine::extract_with_strategy;
use crate::error::ExtractorError;
use crate::prompt::{COMMANDS_QUESTION, IMPLEMENTATION_QUESTION};
use crate::query::{ask_or_empty, structure_or_empty};
use crate::report::{target_name, AnalysisReport};
use crate::stepwise::StepwiseFallback;
use crate::types::{ExtractionStrategy, RawAnswer};
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, info, warn};
use wikiprobe_domain::{CommandRecord, QueryProvider};

/// Raw intermediate data captured during a run
#[derive(Debug, Clone, PartialEq)]
pub struct RawData {
    /// Documentation structure, empty when skipped or unavailable
    pub structure: String,

    /// Answer to the combined command question
    pub commands_answer: String,

    /// Strategy that extracted records from `commands_answer`
    pub strategy: ExtractionStrategy,

    /// Whether the stepwise fallback produced the commands
    pub used_stepwise: bool,
}

impl Default for RawData {
    fn default() -> Self {
        Self {
            structure: String::new(),
            commands_answer: String::new(),
            strategy: ExtractionStrategy::Nothing,
            used_stepwise: false,
        }
    }
}

/// Per-run state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Repository being analyzed (`owner/repo`)
    pub repo_name: String,

    /// Raw intermediate data
    pub raw_data: RawData,
}

/// A finished run: the report plus the state that produced it
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// The report
    pub report: AnalysisReport,

    /// Run state and raw data
    pub state: SessionState,

    /// Wall-clock duration in milliseconds
    pub processing_time_ms: u64,
}

/// Analyzes protocol implementation repositories through a query provider
pub struct AnalysisSession<P> {
    provider: P,
    config: ExtractorConfig,
    cancel: CancelFlag,
}

impl<P> AnalysisSession<P>
where
    P: QueryProvider,
    P::Error: Display,
{
    /// Create a new session
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider,
            config,
            cancel: CancelFlag::new(),
        }
    }

    /// Use an externally owned cancel flag
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Handle for cancelling runs of this session
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Analyze `repo_name` and return the report
    pub fn analyze(&self, repo_name: &str) -> Result<AnalysisReport, ExtractorError> {
        self.run(repo_name).map(|run| run.report)
    }

    /// Analyze `repo_name`, keeping the run state
    pub fn run(&self, repo_name: &str) -> Result<AnalysisRun, ExtractorError> {
        let repo_name = repo_name.trim();
        if repo_name.is_empty() {
            return Err(ExtractorError::InvalidInput(
                "repository name is empty".to_string(),
            ));
        }

        let start = Instant::now();
        let mut state = SessionState {
            repo_name: repo_name.to_string(),
            raw_data: RawData::default(),
        };

        info!("Starting analysis of repository '{}'", repo_name);

        info!("Step 1/3: reading documentation structure");
        if self.config.fetch_structure {
            self.cancel.check()?;
            state.raw_data.structure = structure_or_empty(&self.provider, repo_name);
        } else {
            debug!("Structure lookup disabled");
        }

        info!("Step 2/3: extracting commands");
        let commands = self.extract_commands(&mut state)?;

        info!("Step 3/3: fetching implementation overview");
        self.cancel.check()?;
        let implementation_details = ask_or_empty(&self.provider, repo_name, IMPLEMENTATION_QUESTION);

        let report = AnalysisReport {
            target: target_name(repo_name).to_string(),
            implementation_details,
            custom_commands: commands,
        };

        info!(
            "Analysis complete: {} commands extracted",
            report.command_count()
        );

        Ok(AnalysisRun {
            report,
            state,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Combined question first, stepwise fallback when it yields nothing
    fn extract_commands(
        &self,
        state: &mut SessionState,
    ) -> Result<Vec<CommandRecord>, ExtractorError> {
        self.cancel.check()?;
        let answer = ask_or_empty(&self.provider, &state.repo_name, COMMANDS_QUESTION);

        let outcome = extract_with_strategy(&RawAnswer::from(answer.as_str()));
        state.raw_data.commands_answer = answer;
        state.raw_data.strategy = outcome.strategy;

        if !outcome.records.is_empty() {
            info!(
                "Combined answer gave {} commands via {:?}",
                outcome.records.len(),
                outcome.strategy
            );
            return Ok(outcome.records);
        }

        warn!("Combined answer gave no commands, falling back to stepwise queries");
        state.raw_data.used_stepwise = true;
        StepwiseFallback::new(&self.provider, &self.config, &self.cancel).run(&state.repo_name)
    }
}
