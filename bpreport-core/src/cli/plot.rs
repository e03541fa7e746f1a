use crate::chart::{RenderedCharts, render_charts};
use crate::conf::ReportConfig;
use crate::results::{load_results_file, summarize};
use anyhow::Result;

pub fn plot(cfg: &ReportConfig) -> Result<RenderedCharts> {
    let loaded = load_results_file(&cfg.output.csv)?;
    loaded.ensure_not_empty()?;

    let summary = summarize(&loaded.pool);
    let rendered = render_charts(&loaded.table, &summary, &cfg.output, &cfg.chart)?;

    println!("✔ {} benchmarks", loaded.table.benchmark_count());
    println!("✔ {} schemes", loaded.table.scheme_count());
    println!("✔ Wrote {}", rendered.benchmark_chart.display());
    println!("✔ Wrote {}", rendered.scheme_chart.display());

    Ok(rendered)
}
