use crate::results::{HEADER, ResultsError, aggregate, collect_rows, write_canonical_csv};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const GCC_LOG: &str = "\
bp_sim v1.0
Benchmark: gcc
=== CSV (copy/paste into analysis/results.csv) ===
benchmark,scheme,total,correct,accuracy,hw_bits
gcc,TAGE,1000,950,95.0,12
gcc,bimodal,1000,700,70.0,2
Trace file: gcc.trace
";

const MCF_LOG: &str = "\
=== CSV (copy/paste into analysis/results.csv) ===
benchmark,scheme,total,correct,accuracy,hw_bits
mcf,TAGE,2000,1800,90.0,12

";

#[test]
fn collects_rows_in_file_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let gcc = dir.path().join("gcc.log");
    let mcf = dir.path().join("mcf.log");
    fs::write(&gcc, GCC_LOG).unwrap();
    fs::write(&mcf, MCF_LOG).unwrap();

    // Act
    let collected = collect_rows(&[mcf.clone(), gcc.clone()]).unwrap();

    // Assert
    let lines: Vec<String> = collected.rows.iter().map(|r| r.to_csv_line()).collect();
    assert_eq!(
        lines,
        vec![
            "mcf,TAGE,2000,1800,90.0,12".to_string(),
            "gcc,TAGE,1000,950,95.0,12".to_string(),
            "gcc,bimodal,1000,700,70.0,2".to_string(),
        ]
    );
    assert_eq!(collected.files_read, vec![mcf, gcc]);
    assert!(collected.files_skipped.is_empty());
}

#[test]
fn missing_files_are_skipped() {
    // Arrange
    let dir = tempdir().unwrap();
    let gcc = dir.path().join("gcc.log");
    let missing = dir.path().join("missing.log");
    fs::write(&gcc, GCC_LOG).unwrap();

    // Act
    let collected = collect_rows(&[missing.clone(), gcc]).unwrap();

    // Assert
    assert_eq!(collected.rows.len(), 2);
    assert_eq!(collected.files_skipped, vec![missing]);
}

#[test]
fn no_rows_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let noise = dir.path().join("noise.log");
    fs::write(&noise, "nothing to see here\n").unwrap();
    let missing = dir.path().join("missing.log");

    // Act
    let result = collect_rows(&[noise, missing]);

    // Assert
    assert!(matches!(result, Err(ResultsError::NoRows { inputs: 2 })));
}

#[test]
fn aggregate_writes_header_and_rows() {
    // Arrange
    let dir = tempdir().unwrap();
    let gcc = dir.path().join("gcc.log");
    let out = dir.path().join("results.csv");
    fs::write(&gcc, GCC_LOG).unwrap();

    // Act
    let collected = aggregate(&[gcc], &out).unwrap();

    // Assert
    assert_eq!(collected.rows.len(), 2);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!("{HEADER}\ngcc,TAGE,1000,950,95.0,12\ngcc,bimodal,1000,700,70.0,2\n")
    );
}

#[test]
fn aggregate_without_rows_writes_nothing() {
    // Arrange
    let dir = tempdir().unwrap();
    let out = dir.path().join("results.csv");
    let missing = [dir.path().join("a.log"), dir.path().join("b.log")];

    // Act
    let result = aggregate(&missing, &out);

    // Assert
    assert!(matches!(result, Err(ResultsError::NoRows { .. })));
    assert!(!out.exists());
}

#[test]
fn aggregate_overwrites_previous_output() {
    // Arrange
    let dir = tempdir().unwrap();
    let mcf = dir.path().join("mcf.log");
    let out = dir.path().join("results.csv");
    fs::write(&mcf, MCF_LOG).unwrap();
    fs::write(&out, "stale contents\nfrom an older run\n").unwrap();

    // Act
    aggregate(&[mcf], &out).unwrap();

    // Assert
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!("{HEADER}\nmcf,TAGE,2000,1800,90.0,12\n")
    );
}

#[test]
fn aggregate_is_idempotent() {
    // Arrange
    let dir = tempdir().unwrap();
    let gcc = dir.path().join("gcc.log");
    let mcf = dir.path().join("mcf.log");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    fs::write(&gcc, GCC_LOG).unwrap();
    fs::write(&mcf, MCF_LOG).unwrap();
    let inputs = [gcc, mcf];

    // Act
    aggregate(&inputs, &first).unwrap();
    aggregate(&inputs, &second).unwrap();

    // Assert
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn write_reports_unwritable_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("results.csv");

    // Act
    let result = write_canonical_csv(&out, &[]);

    // Assert
    assert!(matches!(result, Err(ResultsError::Write { .. })));
}
