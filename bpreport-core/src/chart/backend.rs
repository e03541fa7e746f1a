use crate::chart::error::ChartError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Png,
    Svg,
}

impl ChartKind {
    /// `.png` selects the bitmap backend; every other extension gets SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ChartKind::Png,
            _ => ChartKind::Svg,
        }
    }
}

/// Rejects output paths this build cannot render.
pub(crate) fn ensure_supported(path: &Path) -> Result<ChartKind, ChartError> {
    let kind = ChartKind::from_path(path);
    if kind == ChartKind::Png && !cfg!(feature = "png") {
        return Err(ChartError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    Ok(kind)
}
