//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;
use wikiprobe_extractor::{extract_with_strategy, RawAnswer};

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let answer = read_answer(args.input.as_deref())?;
    println!("{}", render_extraction(&answer, formatter)?);
    Ok(())
}

/// Read the raw answer from a file, or stdin when no path is given.
fn read_answer(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Extract records from `answer` and format them.
fn render_extraction(answer: &str, formatter: &Formatter) -> Result<String> {
    let outcome = extract_with_strategy(&RawAnswer::from(answer));
    info!(
        "Recovered {} command(s) via {:?}",
        outcome.records.len(),
        outcome.strategy
    );
    formatter.format_records(&outcome.records)
}
