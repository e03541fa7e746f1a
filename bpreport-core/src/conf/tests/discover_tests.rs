use crate::conf::{ConfigError, discover, expand_inputs, is_glob};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn pattern(root: &Path, glob: &str) -> String {
    root.join(glob).to_string_lossy().into_owned()
}

#[test]
fn discover_returns_sorted_paths() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("z.log"), "").unwrap();
    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("m.log"), "").unwrap();
    fs::write(root.join("c.txt"), "").unwrap();

    // Act
    let result = discover(&pattern(root, "*.log")).unwrap();

    // Assert
    assert_eq!(
        result,
        vec![root.join("a.log"), root.join("m.log"), root.join("z.log"),]
    );
}

#[test]
fn discover_rejects_malformed_patterns() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let result = discover(&pattern(dir.path(), "[*.log"));

    // Assert
    assert!(matches!(result, Err(ConfigError::Glob { .. })));
}

#[test]
fn plain_paths_pass_through_in_order() {
    // Arrange
    let args = vec![PathBuf::from("b.log"), PathBuf::from("missing/a.log")];

    // Act
    let result = expand_inputs(&args);

    // Assert
    assert_eq!(result, args);
}

#[test]
fn globs_expand_in_place() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("runs")).unwrap();
    fs::write(root.join("runs/gcc.log"), "").unwrap();
    fs::write(root.join("runs/mcf.log"), "").unwrap();

    let args = vec![
        root.join("first.log"),
        PathBuf::from(pattern(root, "runs/*.log")),
        root.join("last.log"),
    ];

    // Act
    let result = expand_inputs(&args);

    // Assert
    assert_eq!(
        result,
        vec![
            root.join("first.log"),
            root.join("runs/gcc.log"),
            root.join("runs/mcf.log"),
            root.join("last.log"),
        ]
    );
}

#[test]
fn unmatched_glob_is_kept_for_reporting() {
    // Arrange
    let dir = tempdir().unwrap();
    let unmatched = PathBuf::from(pattern(dir.path(), "*.log"));

    // Act
    let result = expand_inputs(std::slice::from_ref(&unmatched));

    // Assert
    assert_eq!(result, vec![unmatched]);
}

#[test]
fn existing_file_with_brackets_is_not_expanded() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("run[1].log"), "gcc").unwrap();
    fs::write(root.join("run1.log"), "other").unwrap();
    let args = [root.join("run[1].log")];

    // Act
    let result = expand_inputs(&args);

    // Assert
    assert_eq!(result, vec![root.join("run[1].log")]);
}

#[test]
fn existing_file_with_unbalanced_bracket_is_kept() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("run[old.log"), "gcc").unwrap();
    let args = [root.join("run[old.log")];

    // Act
    let result = expand_inputs(&args);

    // Assert
    assert_eq!(result, vec![root.join("run[old.log")]);
}

#[test]
fn malformed_pattern_falls_back_to_literal_path() {
    let dir = tempdir().unwrap();
    let missing = PathBuf::from(pattern(dir.path(), "[*.log"));

    let result = expand_inputs(std::slice::from_ref(&missing));

    assert_eq!(result, vec![missing]);
}

#[test]
fn is_glob_detects_metacharacters() {
    assert!(is_glob(Path::new("logs/*.txt")));
    assert!(is_glob(Path::new("run?.log")));
    assert!(is_glob(Path::new("run[12].log")));
    assert!(!is_glob(Path::new("logs/run.log")));
}
