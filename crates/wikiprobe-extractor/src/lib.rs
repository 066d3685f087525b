//! Wikiprobe Extractor
//!
//! Recovers structured command records from free-form knowledge source answers.
//!
//! # Overview
//!
//! Answers to "which commands does this protocol implementation support?" come
//! back as clean JSON, JSON wrapped in prose, labeled prose, or nothing at all.
//! The extractor tries progressively weaker strategies and, when a combined
//! answer yields nothing, falls back to asking about one command at a time.
//!
//! # Architecture
//!
//! ```text
//! answer → JSON block → Normalizer ─┐
//!        ↘ labeled lines ───────────┴→ CommandRecords
//!                                      (empty? → Stepwise fallback → CommandRecords)
//! ```
//!
//! # Key Features
//!
//! - **JSON-Block Extraction**: First `{` to last `}` span, three payload shapes
//! - **Record Normalization**: Alias table for loosely named keys
//! - **Line Parsing**: English and Chinese `Command`/`Module`/`Logic` labels
//! - **Stepwise Fallback**: Enumerate names, then one detail question each
//! - **Analysis Session**: Full repository analysis producing a JSON report
//!
//! # Example Usage
//!
//! ```
//! use wikiprobe_extractor::{AnalysisSession, ExtractorConfig};
//! use wikiprobe_query::MockProvider;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("Command: USER\nModule: mod_auth.c\nLogic: stores the name");
//! let session = AnalysisSession::new(provider, ExtractorConfig::default());
//!
//! let report = session.analyze("proftpd/proftpd")?;
//!
//! println!("Target: {}", report.target);
//! println!("Commands: {}", report.command_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cancel;
mod config;
mod engine;
mod error;
mod json_block;
mod labels;
mod normalizer;
mod prompt;
mod query;
mod report;
mod session;
mod stepwise;
mod text_parser;
mod types;


pub use cancel::CancelFlag;
pub use config::ExtractorConfig;
pub use engine::{extract_commands, extract_with_strategy};
pub use error::ExtractorError;
pub use json_block::{extract_json_block, find_json_block};
pub use labels::{match_label, Label};
pub use normalizer::{normalize_candidates, normalize_record, Field, FIELD_ALIASES};
pub use prompt::{detail_question, COMMANDS_QUESTION, IMPLEMENTATION_QUESTION, LIST_COMMANDS_QUESTION};
pub use report::{default_report_path, target_name, AnalysisReport};
pub use session::{AnalysisRun, AnalysisSession, RawData, SessionState};
pub use stepwise::{extract_single_command, parse_command_list, StepwiseFallback};
pub use text_parser::{parse_text_response, LineParser};
pub use types::{CandidatePayload, ExtractionOutcome, ExtractionStrategy, RawAnswer};
pub use wikiprobe_domain::CommandRecord;
