//! Font byte sourcing: explicit bytes or a deterministic system scan.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the backend gets its font file.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// Embedder-supplied font file bytes (TTF/OTF).
    Bytes(Arc<Vec<u8>>),
    /// Deterministic scan of standard system font directories.
    Detect,
}

impl FontSource {
    /// Resolve to raw font bytes.
    ///
    /// `Detect` walks the standard font directories, sorts candidate paths,
    /// and returns the first readable `.ttf`/`.otf` file, so the choice is
    /// stable for a given machine.
    pub fn load(&self) -> CrewframeResult<Arc<Vec<u8>>> {
        match self {
            Self::Bytes(b) => {
                if b.is_empty() {
                    return Err(CrewframeError::validation("font bytes must be non-empty"));
                }
                Ok(b.clone())
            }
            Self::Detect => {
                let path = detect_font_path().ok_or_else(|| {
                    CrewframeError::validation(
                        "no usable system font found; supply FontSource::Bytes",
                    )
                })?;
                let bytes = std::fs::read(&path).map_err(|e| {
                    CrewframeError::validation(format!(
                        "failed to read font {}: {e}",
                        path.display()
                    ))
                })?;
                Ok(Arc::new(bytes))
            }
        }
    }
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
    }
    dirs
}

fn detect_font_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    for dir in font_dirs() {
        collect_fonts(&dir, &mut candidates, 0);
    }
    candidates.sort();
    candidates.into_iter().next()
}

fn collect_fonts(dir: &std::path::Path, out: &mut Vec<PathBuf>, depth: usize) {
    if depth > 4 {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_fonts(&path, out, depth + 1);
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if matches!(ext.as_deref(), Some("ttf") | Some("otf")) {
            out.push(path);
        }
    }
}
