use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to plot for {chart}")]
    NoData { chart: &'static str },

    #[error("cannot write {path}: PNG output needs the `png` feature; use an .svg path")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to draw {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

impl ChartError {
    pub fn draw(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Draw {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
