mod discover;
mod error;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use discover::{discover, expand_inputs, is_glob};
pub use error::ConfigError;
pub use loader::{load_config, load_or_default};
pub use types::{
    ChartConfig, DEFAULT_BENCHMARK_CHART, DEFAULT_CSV, DEFAULT_SCHEME_CHART, OutputConfig,
    ReportConfig,
};
