use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::CatalogStore,
};

/// Settings resolved for one command run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locale-dir po`)
/// 2. `.statici18nrc.json` config file (paths relative to the file)
/// 3. Built-in defaults (paths relative to `--path`)
pub struct CommandContext {
    pub config: Config,
    pub base_dir: PathBuf,
    pub locale_dir: PathBuf,
    pub default_locale: String,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(&args.path)?;
        if loaded.from_file {
            debug!(base_dir = %loaded.base_dir.display(), "loaded config file");
        } else {
            debug!("no config file found, using defaults");
        }

        let config = loaded.config;
        let base_dir = loaded.base_dir;
        let locale_dir = args
            .locale_dir
            .clone()
            .unwrap_or_else(|| base_dir.join(&config.locale_dir));
        let default_locale = args
            .default_locale
            .clone()
            .unwrap_or_else(|| config.default_locale.clone());

        Ok(Self {
            config,
            base_dir,
            locale_dir,
            default_locale,
        })
    }

    pub fn store(&self) -> CatalogStore {
        CatalogStore::new(&self.locale_dir)
    }

    /// `cli` if given, else `configured` resolved against the config directory.
    pub fn resolve(&self, cli: Option<&Path>, configured: &str) -> PathBuf {
        cli.map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.join(configured))
    }
}
