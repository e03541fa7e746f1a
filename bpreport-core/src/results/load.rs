use crate::results::error::ResultsError;
use crate::results::lines::lines_lossy;
use crate::results::types::{AccuracyTable, HEADER, HEADER_PREFIX, SchemeAccuracyPool};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lines that can leak into a hand-edited CSV when blocks are pasted from logs.
const NOISE_PREFIXES: &[&str] = &["Trace file:", "Benchmark:", "==="];

#[derive(Debug)]
pub struct LoadedResults {
    pub source: PathBuf,
    pub table: AccuracyTable,
    pub pool: SchemeAccuracyPool,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
}

impl LoadedResults {
    fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            table: AccuracyTable::new(),
            pool: SchemeAccuracyPool::new(),
            rows_loaded: 0,
            rows_skipped: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Fails when nothing usable was loaded. Charts and summaries must not be
    /// produced from an empty table.
    pub fn ensure_not_empty(&self) -> Result<(), ResultsError> {
        if self.is_empty() {
            return Err(ResultsError::EmptyTable {
                path: self.source.clone(),
            });
        }
        Ok(())
    }
}

/// Parses a canonical CSV.
///
/// The first non-empty line must be the header. After that every row is
/// checked on its own: wrong field count, empty key fields, or an accuracy
/// that is not a finite number drop that row and nothing else. `source` is
/// only used for error messages.
pub fn load_results<R: BufRead>(reader: R, source: &Path) -> Result<LoadedResults, ResultsError> {
    let mut loaded = LoadedResults::new(source);
    let mut saw_header = false;

    for line in lines_lossy(reader) {
        let line = line.map_err(|e| ResultsError::read(source, e))?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !saw_header {
            if !line.starts_with(HEADER_PREFIX) {
                return Err(missing_header(source));
            }
            saw_header = true;
            continue;
        }

        match parse_row(line) {
            Some((benchmark, scheme, accuracy)) => {
                loaded.table.insert(benchmark, scheme, accuracy);
                loaded.pool.push(scheme, accuracy);
                loaded.rows_loaded += 1;
            }
            None => loaded.rows_skipped += 1,
        }
    }

    if !saw_header {
        return Err(missing_header(source));
    }

    debug!(
        path = %source.display(),
        loaded = loaded.rows_loaded,
        skipped = loaded.rows_skipped,
        "loaded results"
    );

    Ok(loaded)
}

pub fn load_results_file(path: &Path) -> Result<LoadedResults, ResultsError> {
    let file = File::open(path).map_err(|e| ResultsError::read(path, e))?;
    load_results(BufReader::new(file), path)
}

fn parse_row(line: &str) -> Option<(&str, &str, f64)> {
    if NOISE_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[benchmark, scheme, _total, _correct, accuracy, _hw_bits] = parts.as_slice() else {
        return None;
    };

    if benchmark.is_empty() || scheme.is_empty() || accuracy.is_empty() {
        return None;
    }

    let accuracy = accuracy.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((benchmark, scheme, accuracy))
}

fn missing_header(source: &Path) -> ResultsError {
    ResultsError::MissingHeader {
        path: source.to_path_buf(),
        expected: HEADER,
    }
}
