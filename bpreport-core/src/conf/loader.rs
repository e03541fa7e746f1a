use crate::conf::error::ConfigError;
use crate::conf::types::{ChartConfig, ReportConfig};
use std::fs;
use std::path::Path;

/// Loads a report config from a TOML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: ReportConfig = toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    validate_chart(&cfg.chart)?;
    Ok(cfg)
}

/// Uses the file at `path` when given, the built-in defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<ReportConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ReportConfig::default()),
    }
}

fn validate_chart(chart: &ChartConfig) -> Result<(), ConfigError> {
    for (key, (width, height)) in [
        ("benchmark_size", chart.benchmark_size),
        ("scheme_size", chart.scheme_size),
    ] {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidChartSize { key, width, height });
        }
    }
    Ok(())
}
