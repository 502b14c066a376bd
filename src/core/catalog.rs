//! Locale discovery and memoized catalog loading.
//!
//! A [`CatalogStore`] is bound to one catalog root laid out as
//! `<root>/<locale>/LC_MESSAGES/messages.po`. Locales and catalogs are read at
//! most once per store; concurrent first reads wait on the same load.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use tracing::{debug, warn};

use crate::core::{
    error::{Result, TranslateError},
    parsers::po::parse_po_file,
};

pub type Locale = String;

/// Directories whose name contains this marker hold the extraction template.
pub const TEMPLATE_MARKER: &str = "template";

/// Catalog file location relative to a locale directory.
pub const CATALOG_FILE: &str = "LC_MESSAGES/messages.po";

/// Translated forms for one source string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    pub forms: Vec<String>,
}

impl TranslationEntry {
    pub fn new(forms: Vec<String>) -> Self {
        Self { forms }
    }

    /// The first translated form, if present and non-empty.
    pub fn first_form(&self) -> Option<&str> {
        self.forms
            .first()
            .map(String::as_str)
            .filter(|form| !form.is_empty())
    }
}

/// Source string -> translation entry for one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, TranslationEntry>,
}

impl Catalog {
    pub fn insert(&mut self, source: impl Into<String>, entry: TranslationEntry) {
        self.entries.insert(source.into(), entry);
    }

    pub fn get(&self, source: &str) -> Option<&TranslationEntry> {
        self.entries.get(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TranslationEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (S, TranslationEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(source, entry)| (source.into(), entry))
                .collect(),
        }
    }
}

pub type Catalogs = HashMap<Locale, Arc<Catalog>>;

#[derive(Debug)]
pub struct CatalogStore {
    root: PathBuf,
    locales: Mutex<Option<Arc<Vec<Locale>>>>,
    catalogs: Mutex<Option<Arc<Catalogs>>>,
}

impl CatalogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locales: Mutex::new(None),
            catalogs: Mutex::new(None),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.root.join(locale).join(CATALOG_FILE)
    }

    /// Locales available under the root, in directory enumeration order.
    ///
    /// The directory is read on the first successful call only.
    pub fn locales(&self) -> Result<Arc<Vec<Locale>>> {
        let mut cached = self.locales.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(locales) = cached.as_ref() {
            return Ok(Arc::clone(locales));
        }

        let locales = Arc::new(self.discover_locales()?);
        debug!(root = %self.root.display(), count = locales.len(), "discovered locales");
        *cached = Some(Arc::clone(&locales));
        Ok(locales)
    }

    /// Catalogs for every discovered locale, loaded together on first call.
    ///
    /// Locales whose catalog file is missing or unparsable are left out of the
    /// map; [`CatalogStore::catalog`] reports them as missing.
    pub fn catalogs(&self) -> Result<Arc<Catalogs>> {
        let mut cached = self
            .catalogs
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(catalogs) = cached.as_ref() {
            return Ok(Arc::clone(catalogs));
        }

        let locales = self.locales()?;
        let mut catalogs = Catalogs::with_capacity(locales.len());
        for locale in locales.iter() {
            let path = self.catalog_path(locale);
            match parse_po_file(&path) {
                Ok(catalog) => {
                    debug!(%locale, entries = catalog.len(), "loaded catalog");
                    catalogs.insert(locale.clone(), Arc::new(catalog));
                }
                Err(err) => warn!(%locale, "skipping catalog: {err:#}"),
            }
        }

        let catalogs = Arc::new(catalogs);
        *cached = Some(Arc::clone(&catalogs));
        Ok(catalogs)
    }

    pub fn catalog(&self, locale: &str) -> Result<Arc<Catalog>> {
        self.catalogs()?
            .get(locale)
            .cloned()
            .ok_or_else(|| TranslateError::CatalogMissing {
                locale: locale.to_string(),
            })
    }

    fn discover_locales(&self) -> Result<Vec<Locale>> {
        if !self.root.is_dir() {
            return Err(TranslateError::LocaleRootMissing {
                path: self.root.clone(),
            });
        }

        let entries = fs::read_dir(&self.root).map_err(|e| TranslateError::io(&self.root, e))?;
        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TranslateError::io(&self.root, e))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.contains(TEMPLATE_MARKER) || !entry.path().is_dir() {
                continue;
            }
            locales.push(name);
        }
        Ok(locales)
    }
}
