use bpreport_core::conf::OutputConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding simulator logs and the artifacts built from them.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// A simulator log for one benchmark with a single CSV block.
    /// `rows` are `(scheme, accuracy)` pairs.
    pub fn write_sim_log(&self, name: &str, benchmark: &str, rows: &[(&str, f64)]) -> PathBuf {
        self.write(name, &sim_log(benchmark, rows))
    }

    /// Output paths inside this directory, SVG charts.
    pub fn output(&self) -> OutputConfig {
        OutputConfig {
            csv: self.path("results.csv"),
            benchmark_chart: self.path("accuracy_by_benchmark.svg"),
            scheme_chart: self.path("accuracy_by_scheme.svg"),
        }
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sim_log(benchmark: &str, rows: &[(&str, f64)]) -> String {
    let mut out = format!("Trace file: traces/{benchmark}.trace.gz\n");
    out.push_str("warming up predictors...\n\n");
    out.push_str("=== CSV (copy/paste into analysis/results.csv) ===\n");
    out.push_str("benchmark,scheme,total,correct,accuracy,hw_bits\n");
    for (scheme, accuracy) in rows {
        let correct = (accuracy * 10.0).round() as u64;
        out.push_str(&format!("{benchmark},{scheme},1000,{correct},{accuracy},4096\n"));
    }
    out.push('\n');
    out.push_str("done.\n");
    out
}
