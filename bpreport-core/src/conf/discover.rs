use crate::conf::error::ConfigError;
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::debug;

const GLOB_META: &[char] = &['*', '?', '['];

/// Discovers files matching a glob pattern.
///
/// Searches the filesystem for all files that match the given glob pattern
/// and returns their paths in sorted order. Unreadable entries are silently
/// filtered out.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed or cannot be parsed.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .collect();

    paths.sort();
    Ok(paths)
}

pub fn is_glob(path: &Path) -> bool {
    path.to_string_lossy().contains(GLOB_META)
}

/// Expands log arguments into concrete paths, keeping argument order.
///
/// An argument that names an existing file is used as-is even when it
/// contains glob metacharacters. Other plain paths pass through untouched so
/// the aggregator can report them, and so does a pattern that matches
/// nothing or does not parse.
pub fn expand_inputs(args: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(args.len());

    for arg in args {
        if arg.exists() || !is_glob(arg) {
            out.push(arg.clone());
            continue;
        }

        match discover(&arg.to_string_lossy()) {
            Ok(matches) if !matches.is_empty() => out.extend(matches),
            Ok(_) => out.push(arg.clone()),
            Err(e) => {
                debug!(path = %arg.display(), error = %e, "not a usable glob, keeping literal path");
                out.push(arg.clone());
            }
        }
    }

    out
}
