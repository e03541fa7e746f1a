use bpreport_core::results::{aggregate, load_results_file};
use integration_tests::harness::{LogDir, capture_events};
use tracing::Level;

#[test]
fn missing_log_emits_a_warning_with_its_path() {
    // Arrange
    let dir = LogDir::new();
    let present = dir.write_sim_log("gcc.log", "gcc", &[("TAGE", 95.0)]);
    let missing = dir.path("nope.log");
    let out = dir.path("results.csv");

    // Act
    let (result, events) = capture_events(|| aggregate(&[missing.clone(), present], &out));

    // Assert
    assert!(result.is_ok());

    let warning = events
        .iter()
        .find(|e| e.level == Level::WARN)
        .expect("expected a warning for the missing log");
    assert_eq!(warning.message(), Some("file not found, skipping"));
    assert_eq!(warning.field("path"), Some(missing.display().to_string().as_str()));
    assert!(warning.target.starts_with("bpreport_core"));
}

#[test]
fn aggregate_reports_what_it_wrote() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_sim_log("gcc.log", "gcc", &[("TAGE", 95.0), ("gshare", 90.0)]);
    let out = dir.path("results.csv");

    // Act
    let (_, events) = capture_events(|| aggregate(&[log], &out).unwrap());

    // Assert
    let info = events
        .iter()
        .find(|e| e.message() == Some("wrote canonical csv"))
        .expect("expected a summary event");
    assert_eq!(info.level, Level::INFO);
    assert_eq!(info.field("rows"), Some("2"));
    assert_eq!(info.field("skipped"), Some("0"));
}

#[test]
fn clean_runs_do_not_warn() {
    let dir = LogDir::new();
    let log = dir.write_sim_log("gcc.log", "gcc", &[("TAGE", 95.0)]);
    let out = dir.path("results.csv");

    let (_, events) = capture_events(|| {
        aggregate(&[log], &out).unwrap();
        load_results_file(&out).unwrap()
    });

    assert!(events.iter().all(|e| e.level != Level::WARN));
}
