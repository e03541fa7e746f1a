use crate::conf::ReportConfig;
use crate::results::{LoadedResults, SchemeSummary, load_results_file, summarize};
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, PartialEq, Serialize)]
pub struct SchemeLine<'a> {
    pub scheme: &'a str,
    pub geomean: f64,
    pub samples: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub source: &'a Path,
    pub benchmarks: usize,
    pub rows: usize,
    pub schemes: Vec<SchemeLine<'a>>,
}

pub fn build_report<'a>(loaded: &'a LoadedResults, summary: &'a SchemeSummary) -> SummaryReport<'a> {
    SummaryReport {
        source: &loaded.source,
        benchmarks: loaded.table.benchmark_count(),
        rows: loaded.rows_loaded,
        schemes: summary
            .iter()
            .map(|(scheme, geomean)| SchemeLine {
                scheme,
                geomean,
                samples: loaded.pool.get(scheme).map_or(0, <[f64]>::len),
            })
            .collect(),
    }
}

/// Aligned plain-text table, one scheme per line in first-appearance order.
pub fn render_summary(report: &SummaryReport<'_>) -> String {
    let width = report
        .schemes
        .iter()
        .map(|s| s.scheme.chars().count())
        .max()
        .unwrap_or(0)
        .max("scheme".len());

    let mut out = format!("{:<width$}  {:>8}  {:>7}\n", "scheme", "geomean", "samples");
    for line in &report.schemes {
        out.push_str(&format!(
            "{:<width$}  {:>8.2}  {:>7}\n",
            line.scheme, line.geomean, line.samples
        ));
    }
    out
}

pub fn summary(cfg: &ReportConfig, json: bool) -> Result<()> {
    let loaded = load_results_file(&cfg.output.csv)?;
    loaded.ensure_not_empty()?;

    let summary = summarize(&loaded.pool);
    let report = build_report(&loaded, &summary);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({} rows, {} benchmarks)\n",
        report.source.display().bold(),
        report.rows,
        report.benchmarks
    );
    print!("{}", render_summary(&report));

    Ok(())
}
