use crate::chart::ChartError;
use crate::conf::ConfigError;
use crate::results::ResultsError;

/// Follow-up advice printed under a fatal error, when there is any.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<ResultsError>() {
        return results_error_hint(err);
    }
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        return config_error_hint(err);
    }
    if let Some(ChartError::NoData { .. }) = err.downcast_ref::<ChartError>() {
        return Some("Run `bpreport summary` to check what the results CSV contains.");
    }
    None
}

pub fn results_error_hint(err: &ResultsError) -> Option<&'static str> {
    match err {
        ResultsError::NoRows { .. } => Some(
            "Rows are only picked up inside blocks that start with a marker line.\n\
             \n\
             Example:\n\
             \n\
             === CSV (copy/paste into analysis/results.csv) ===\n\
             benchmark,scheme,total,correct,accuracy,hw_bits\n\
             gcc,TAGE,1000,950,95.0,12",
        ),

        ResultsError::MissingHeader { .. } => Some(
            "The results CSV must start with its header line.\n\
             \n\
             Regenerate it with `bpreport aggregate <logs>...`.",
        ),

        ResultsError::EmptyTable { .. } => Some(
            "Every row was rejected. Rows need a benchmark, a scheme and a numeric accuracy.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidChartSize { .. } => Some(
            "Chart sizes are [width, height] in pixels.\n\
             \n\
             Example:\n\
             \n\
             [chart]\n\
             benchmark_size = [1600, 800]",
        ),

        _ => None,
    }
}
