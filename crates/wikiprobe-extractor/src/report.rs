//! Analysis report and its JSON file format

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use wikiprobe_domain::CommandRecord;

/// Result of analyzing one repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Implementation name (the repository part of `owner/repo`)
    pub target: String,

    /// Architecture overview as answered by the knowledge source
    pub implementation_details: String,

    /// Extracted commands, possibly empty
    pub custom_commands: Vec<CommandRecord>,
}

impl AnalysisReport {
    /// Number of extracted commands
    pub fn command_count(&self) -> usize {
        self.custom_commands.len()
    }

    /// Write the report as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExtractorError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        info!("Report saved to {}", path.display());
        Ok(())
    }

    /// Read a report written by `save`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Implementation name for an `owner/repo` repository name
pub fn target_name(repo_name: &str) -> &str {
    repo_name.rsplit('/').next().unwrap_or(repo_name)
}

/// Default report file name for a repository (`owner_repo_analysis.json`)
pub fn default_report_path(repo_name: &str) -> String {
    format!("{}_analysis.json", repo_name.replace('/', "_"))
}
