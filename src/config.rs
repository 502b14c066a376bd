use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LOCALE, FileType};

pub const CONFIG_FILE_NAME: &str = ".statici18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog root: one `<locale>/LC_MESSAGES/messages.po` per locale.
    #[serde(default = "default_locale_dir")]
    pub locale_dir: String,
    /// Extra catalog directories consumed by message extraction tooling.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub msg_dirs: Vec<String>,
    /// Locale written at the output root without a prefix directory.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
    #[serde(default = "default_build_root")]
    pub source_root: String,
    #[serde(default = "default_build_root")]
    pub output_root: String,
    /// Glob (relative to `sourceRoot`) -> file type of the matching files.
    #[serde(default = "default_includes")]
    pub includes: BTreeMap<String, FileType>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_locale_dir() -> String {
    "locale".to_string()
}

fn default_default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_build_root() -> String {
    "build".to_string()
}

fn default_includes() -> BTreeMap<String, FileType> {
    BTreeMap::from([("**/*.js".to_string(), FileType::Javascript)])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_dir: default_locale_dir(),
            msg_dirs: Vec::new(),
            default_locale: default_default_locale(),
            source_root: default_build_root(),
            output_root: default_build_root(),
            includes: default_includes(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `includes` or `ignores` is invalid,
    /// or if an include maps to a file type without a marker pattern.
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            bail!("'defaultLocale' must not be empty");
        }

        for (pattern, file_type) in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
            if file_type.rule().is_none() {
                bail!(
                    "File type '{}' in 'includes' (\"{}\") is not supported yet",
                    file_type,
                    pattern
                );
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Compiled include rules. Call after [`Config::validate`].
    pub fn include_patterns(&self) -> Result<Vec<(Pattern, FileType)>> {
        self.includes
            .iter()
            .map(|(pattern, file_type)| {
                let compiled = Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
                Ok((compiled, *file_type))
            })
            .collect()
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file; relative paths in the config resolve against it.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
