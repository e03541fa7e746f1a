use crate::results::error::ResultsError;
use crate::results::extract::extract_from_file;
use crate::results::types::{HEADER, ResultRow};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Rows gathered from a set of logs, in file order then line order.
#[derive(Debug, Default)]
pub struct Collected {
    pub rows: Vec<ResultRow>,
    pub files_read: Vec<PathBuf>,
    pub files_skipped: Vec<PathBuf>,
}

/// Runs the extractor over every log in `paths`.
///
/// Missing or unreadable logs are skipped with a warning. Collecting nothing
/// at all is an error so callers never write a header-only CSV by accident.
pub fn collect_rows<P: AsRef<Path>>(paths: &[P]) -> Result<Collected, ResultsError> {
    let mut collected = Collected::default();

    for path in paths {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "file not found, skipping");
            collected.files_skipped.push(path.to_path_buf());
            continue;
        }

        match extract_from_file(path) {
            Ok(rows) => {
                collected.rows.extend(rows);
                collected.files_read.push(path.to_path_buf());
            }
            Err(ResultsError::Read { source, .. }) => {
                warn!(path = %path.display(), error = %source, "unreadable log, skipping");
                collected.files_skipped.push(path.to_path_buf());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unusable log, skipping");
                collected.files_skipped.push(path.to_path_buf());
            }
        }
    }

    if collected.rows.is_empty() {
        return Err(ResultsError::NoRows {
            inputs: paths.len(),
        });
    }

    Ok(collected)
}

/// Overwrites `path` with the header followed by one line per row.
pub fn write_canonical_csv(path: &Path, rows: &[ResultRow]) -> Result<(), ResultsError> {
    write_rows(path, rows).map_err(|e| ResultsError::write(path, e))
}

fn write_rows(path: &Path, rows: &[ResultRow]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{HEADER}")?;
    for row in rows {
        writeln!(out, "{}", row.to_csv_line())?;
    }

    out.flush()
}

/// Collects rows from `paths` and writes them to `out`.
///
/// Nothing is written when no rows were found.
pub fn aggregate<P: AsRef<Path>>(paths: &[P], out: &Path) -> Result<Collected, ResultsError> {
    let collected = collect_rows(paths)?;
    write_canonical_csv(out, &collected.rows)?;

    info!(
        path = %out.display(),
        rows = collected.rows.len(),
        files = collected.files_read.len(),
        skipped = collected.files_skipped.len(),
        "wrote canonical csv"
    );

    Ok(collected)
}
