//! Benchmark result processing
//!
//! Simulator runs print their results as small CSV blocks buried inside a lot
//! of free-form log output. This module pulls those blocks back out, merges
//! them into one canonical CSV, and reads that CSV back into per-benchmark and
//! per-scheme views for reporting.
//!
//! The overall data processing architecture is:
//!
//! log files
//! extract (RowExtractor, one per file)
//! aggregate (canonical CSV)
//! load (AccuracyTable + SchemeAccuracyPool)
//! stats (SchemeSummary)
//!

mod aggregate;
mod error;
mod extract;
mod lines;
mod load;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{Collected, aggregate, collect_rows, write_canonical_csv};
pub use error::ResultsError;
pub use extract::{BlockState, LineKind, RowExtractor, classify, extract_from_file, extract_rows, transition};
pub use load::{LoadedResults, load_results, load_results_file};
pub use stats::{SchemeSummary, geometric_mean, summarize};
pub use types::{AccuracyTable, FIELD_COUNT, HEADER, ResultRow, SchemeAccuracyPool};
