//! Source tree scanning: which files get translated, and as what type.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{FileType, TranslationRequest};

/// A translatable file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the source root.
    pub relative: PathBuf,
    pub file_type: FileType,
}

impl SourceFile {
    pub fn read_request(&self) -> Result<TranslationRequest> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read source file: {}", self.path.display()))?;
        Ok(TranslationRequest::new(content, self.file_type).with_path(&self.relative))
    }
}

/// Result of scanning the source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<SourceFile>,
    pub skipped_count: usize,
}

/// Walks `source_root` and keeps files matching one of `includes`.
///
/// The first include whose pattern matches the relative path decides the file
/// type. Top-level directories named in `skip_dirs` (previous per-locale
/// outputs) are not descended into.
pub fn scan_sources(
    source_root: &Path,
    includes: &[(Pattern, FileType)],
    ignores: &[Pattern],
    skip_dirs: &[String],
) -> Result<ScanResult> {
    if !source_root.is_dir() {
        bail!(
            "Source directory '{}' does not exist.\n\
             Hint: Check your .statici18nrc.json 'sourceRoot' setting.",
            source_root.display()
        );
    }

    let mut result = ScanResult::default();
    let walker = WalkDir::new(source_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() != 1
                || !entry.file_type().is_dir()
                || !skip_dirs
                    .iter()
                    .any(|dir| entry.file_name().to_str() == Some(dir.as_str()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("cannot access path: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source_root) else {
            continue;
        };

        if ignores.iter().any(|p| p.matches_path(relative)) {
            debug!(path = %relative.display(), "ignored");
            continue;
        }

        if let Some((_, file_type)) = includes.iter().find(|(p, _)| p.matches_path(relative)) {
            result.files.push(SourceFile {
                path: path.to_path_buf(),
                relative: relative.to_path_buf(),
                file_type: *file_type,
            });
        }
    }

    Ok(result)
}
