//! Accuracy charts rendered with plotters.

mod backend;
mod benchmark;
mod error;
mod scheme;


pub use backend::ChartKind;
pub use benchmark::render_benchmark_chart;
pub use error::ChartError;
pub use scheme::render_scheme_chart;

use crate::conf::{ChartConfig, OutputConfig};
use crate::results::{AccuracyTable, SchemeSummary};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    pub benchmark_chart: PathBuf,
    pub scheme_chart: PathBuf,
}

/// Renders both charts. Inputs and output formats are checked up front, and
/// the benchmark chart is removed again if the scheme chart fails, so callers
/// get both files or neither.
pub fn render_charts(
    table: &AccuracyTable,
    summary: &SchemeSummary,
    output: &OutputConfig,
    chart: &ChartConfig,
) -> Result<RenderedCharts, ChartError> {
    if table.is_empty() || summary.is_empty() {
        return Err(ChartError::NoData {
            chart: "accuracy charts",
        });
    }

    backend::ensure_supported(&output.benchmark_chart)?;
    backend::ensure_supported(&output.scheme_chart)?;

    render_benchmark_chart(table, &output.benchmark_chart, chart.benchmark_size)?;
    info!(path = %output.benchmark_chart.display(), "wrote chart");

    if let Err(e) = render_scheme_chart(summary, &output.scheme_chart, chart.scheme_size) {
        if let Err(rm) = fs::remove_file(&output.benchmark_chart) {
            warn!(path = %output.benchmark_chart.display(), error = %rm, "could not remove partial output");
        }
        return Err(e);
    }
    info!(path = %output.scheme_chart.display(), "wrote chart");

    Ok(RenderedCharts {
        benchmark_chart: output.benchmark_chart.clone(),
        scheme_chart: output.scheme_chart.clone(),
    })
}
