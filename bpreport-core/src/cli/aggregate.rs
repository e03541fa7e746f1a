use crate::conf::{ReportConfig, expand_inputs};
use crate::results;
use anyhow::Result;
use std::path::PathBuf;

/// Merges every log in `logs` into the configured CSV and returns the row
/// count.
pub fn aggregate(logs: &[PathBuf], cfg: &ReportConfig) -> Result<usize> {
    let paths = expand_inputs(logs);
    let collected = results::aggregate(&paths, &cfg.output.csv)?;

    println!(
        "Wrote {} rows to {}",
        collected.rows.len(),
        cfg.output.csv.display()
    );

    Ok(collected.rows.len())
}
