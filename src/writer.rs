//! Places translated copies under the output root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{TranslationResult, lang_prefix};

/// Writes `<output_root>/<locale prefix><relative path>` for each result.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_root: PathBuf,
    default_locale: String,
    dry_run: bool,
}

impl OutputWriter {
    pub fn new(output_root: impl Into<PathBuf>, default_locale: impl Into<String>) -> Self {
        Self {
            output_root: output_root.into(),
            default_locale: default_locale.into(),
            dry_run: false,
        }
    }

    /// Compute paths without touching the filesystem.
    pub fn dry_run(self, dry_run: bool) -> Self {
        Self { dry_run, ..self }
    }

    pub fn output_path(&self, lang: &str, relative: &Path) -> PathBuf {
        let prefix = lang_prefix(lang, Some(self.default_locale.as_str()));
        self.output_root.join(prefix).join(relative)
    }

    /// Returns the path the translation was (or would be) written to.
    pub fn write(&self, result: &TranslationResult, relative: &Path) -> Result<PathBuf> {
        let path = self.output_path(&result.lang, relative);
        if self.dry_run {
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, &result.translation)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(path)
    }
}
