use crate::results::{SchemeAccuracyPool, geometric_mean, summarize};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn geometric_mean_of_equal_values_is_that_value() {
    assert_close(geometric_mean(&[50.0, 50.0, 50.0]), 50.0);
}

#[test]
fn zero_values_are_excluded_not_multiplied_in() {
    assert_close(geometric_mean(&[0.0, 80.0]), 80.0);
}

#[test]
fn negative_values_are_excluded() {
    assert_close(geometric_mean(&[-10.0, 25.0, 100.0]), 50.0);
}

#[test]
fn nothing_positive_gives_zero() {
    assert_eq!(geometric_mean(&[]), 0.0);
    assert_eq!(geometric_mean(&[0.0, 0.0]), 0.0);
}

#[test]
fn geometric_mean_of_mixed_values() {
    // sqrt(0.9 * 0.4) = 0.6
    assert_close(geometric_mean(&[90.0, 40.0]), 60.0);
}

#[test]
fn many_small_values_do_not_underflow() {
    let values = vec![0.5; 10_000];
    assert_close(geometric_mean(&values), 0.5);
}

#[test]
fn summarize_keeps_pool_order_and_counts_duplicates() {
    // Arrange
    let mut pool = SchemeAccuracyPool::new();
    pool.push("TAGE", 90.0);
    pool.push("bimodal", 0.0);
    pool.push("TAGE", 40.0);

    // Act
    let summary = summarize(&pool);

    // Assert
    let schemes: Vec<&str> = summary.iter().map(|(scheme, _)| scheme).collect();
    assert_eq!(schemes, vec!["TAGE", "bimodal"]);
    assert_close(summary.get("TAGE").unwrap(), 60.0);
    assert_eq!(summary.get("bimodal"), Some(0.0));
    assert_eq!(summary.len(), 2);
}
