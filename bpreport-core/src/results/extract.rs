//! CSV block recognizer for simulator logs.
//!
//! A log is mostly free text. Result rows only count when they sit inside a
//! block opened by a `=== CSV` marker line. The block stays open until a blank
//! line, a known annotation line, or any line that is not a six-field row.
//! A bad line always closes the block; it is never skipped over.

use crate::results::error::ResultsError;
use crate::results::lines::lines_lossy;
use crate::results::types::{HEADER_PREFIX, ResultRow};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const BLOCK_MARKER: &str = "=== CSV";
const ANNOTATION_PREFIXES: &[&str] = &["Trace file:", "Benchmark:"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Outside,
    Inside,
}

/// Structural role of a trimmed log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `=== CSV ...`
    Marker,
    /// Repeated `benchmark,scheme,...` header at the top of a block.
    Header,
    /// `Trace file:` / `Benchmark:` lines printed right after a block.
    Annotation,
    /// Anything else. Only meaningful inside a block.
    Data,
}

pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with(BLOCK_MARKER) {
        LineKind::Marker
    } else if line.starts_with(HEADER_PREFIX) {
        LineKind::Header
    } else if ANNOTATION_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineKind::Annotation
    } else {
        LineKind::Data
    }
}

/// Applies one line to the recognizer.
///
/// Blank and marker lines act in any state. Everything else is ignored while
/// outside a block; inside a block, a line that does not split into exactly
/// six fields ends the block.
pub fn transition(state: BlockState, raw: &str) -> (BlockState, Option<ResultRow>) {
    let line = raw.trim();

    match (classify(line), state) {
        (LineKind::Blank, _) => (BlockState::Outside, None),
        (LineKind::Marker, _) => (BlockState::Inside, None),
        (_, BlockState::Outside) => (BlockState::Outside, None),
        (LineKind::Header, BlockState::Inside) => (BlockState::Inside, None),
        (LineKind::Annotation, BlockState::Inside) => (BlockState::Outside, None),
        (LineKind::Data, BlockState::Inside) => match ResultRow::from_line(line) {
            Some(row) => (BlockState::Inside, Some(row)),
            None => (BlockState::Outside, None),
        },
    }
}

/// Line-at-a-time driver around [`transition`].
#[derive(Debug, Default)]
pub struct RowExtractor {
    state: BlockState,
}

impl RowExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn feed(&mut self, raw: &str) -> Option<ResultRow> {
        let (next, row) = transition(self.state, raw);
        self.state = next;
        row
    }
}

/// Scans a whole log and returns every row found inside CSV blocks.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Lines are decoded lossily so
/// stray binary output in a log never aborts the scan. Only IO failures are
/// errors.
pub fn extract_rows<R: BufRead>(reader: R) -> io::Result<Vec<ResultRow>> {
    let mut extractor = RowExtractor::new();
    let mut rows = Vec::new();

    for line in lines_lossy(reader) {
        if let Some(row) = extractor.feed(&line?) {
            rows.push(row);
        }
    }

    Ok(rows)
}

pub fn extract_from_file(path: &Path) -> Result<Vec<ResultRow>, ResultsError> {
    let file = File::open(path).map_err(|e| ResultsError::read(path, e))?;
    let rows = extract_rows(BufReader::new(file)).map_err(|e| ResultsError::read(path, e))?;

    debug!(path = %path.display(), rows = rows.len(), "scanned log");
    Ok(rows)
}
