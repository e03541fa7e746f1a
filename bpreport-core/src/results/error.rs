use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    // IO
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Whole-run failures
    #[error("no CSV rows found in {inputs} provided log(s)")]
    NoRows { inputs: usize },

    #[error("{path} does not start with the '{expected}' header")]
    MissingHeader {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("no valid data found in {path}")]
    EmptyTable { path: PathBuf },
}

impl ResultsError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
