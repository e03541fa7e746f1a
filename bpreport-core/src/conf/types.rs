use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CSV: &str = "results.csv";
pub const DEFAULT_BENCHMARK_CHART: &str = "accuracy_by_benchmark.svg";
pub const DEFAULT_SCHEME_CHART: &str = "accuracy_by_scheme.svg";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub output: OutputConfig,
    pub chart: ChartConfig,
}

/// Where artifacts are written. Relative paths resolve against the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub csv: PathBuf,
    pub benchmark_chart: PathBuf,
    pub scheme_chart: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: PathBuf::from(DEFAULT_CSV),
            benchmark_chart: PathBuf::from(DEFAULT_BENCHMARK_CHART),
            scheme_chart: PathBuf::from(DEFAULT_SCHEME_CHART),
        }
    }
}

/// Image sizes in pixels, `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub benchmark_size: (u32, u32),
    pub scheme_size: (u32, u32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            benchmark_size: (1600, 800),
            scheme_size: (1280, 640),
        }
    }
}
