use indexmap::{IndexMap, IndexSet};

/// Header line of the canonical CSV, also printed by the simulator at the top
/// of each block.
pub const HEADER: &str = "benchmark,scheme,total,correct,accuracy,hw_bits";

/// Prefix shared by every header variant the simulator has emitted.
pub(crate) const HEADER_PREFIX: &str = "benchmark,scheme";

pub const FIELD_COUNT: usize = 6;

/// One line of benchmark output.
///
/// Fields are kept exactly as they appeared between the commas. Only the
/// field count is checked at extraction time; numeric fields are opaque
/// strings until the loader parses `accuracy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub benchmark: String,
    pub scheme: String,
    pub total: String,
    pub correct: String,
    pub accuracy: String,
    pub hw_bits: String,
}

impl ResultRow {
    /// Splits `line` on commas, returning `None` unless it has exactly
    /// [`FIELD_COUNT`] parts.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        let &[benchmark, scheme, total, correct, accuracy, hw_bits] = parts.as_slice() else {
            return None;
        };

        Some(Self {
            benchmark: benchmark.to_string(),
            scheme: scheme.to_string(),
            total: total.to_string(),
            correct: correct.to_string(),
            accuracy: accuracy.to_string(),
            hw_bits: hw_bits.to_string(),
        })
    }

    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.benchmark.as_str(),
            self.scheme.as_str(),
            self.total.as_str(),
            self.correct.as_str(),
            self.accuracy.as_str(),
            self.hw_bits.as_str(),
        ]
    }

    pub fn to_csv_line(&self) -> String {
        self.fields().join(",")
    }
}

/// benchmark -> scheme -> accuracy.
///
/// Re-inserting an existing pair replaces the value but keeps its position, so
/// iteration order is always order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyTable {
    benchmarks: IndexMap<String, IndexMap<String, f64>>,
    schemes: IndexSet<String>,
}

impl AccuracyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, benchmark: &str, scheme: &str, accuracy: f64) {
        self.benchmarks
            .entry(benchmark.to_string())
            .or_default()
            .insert(scheme.to_string(), accuracy);

        if !self.schemes.contains(scheme) {
            self.schemes.insert(scheme.to_string());
        }
    }

    pub fn get(&self, benchmark: &str, scheme: &str) -> Option<f64> {
        self.benchmarks
            .get(benchmark)
            .and_then(|schemes| schemes.get(scheme))
            .copied()
    }

    pub fn benchmarks(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.keys().map(String::as_str)
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    pub fn benchmark_count(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn scheme_count(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

/// scheme -> every accuracy observed for it, in load order.
///
/// Unlike [`AccuracyTable`] nothing is overwritten: duplicate pairs and
/// multiple benchmarks all contribute a sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeAccuracyPool {
    samples: IndexMap<String, Vec<f64>>,
}

impl SchemeAccuracyPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scheme: &str, accuracy: f64) {
        self.samples
            .entry(scheme.to_string())
            .or_default()
            .push(accuracy);
    }

    pub fn get(&self, scheme: &str) -> Option<&[f64]> {
        self.samples.get(scheme).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.samples
            .iter()
            .map(|(scheme, values)| (scheme.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
