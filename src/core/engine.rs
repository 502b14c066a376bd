//! String lookup and marker rewriting for one locale.

use std::sync::Arc;

use tracing::trace;

use crate::core::{
    catalog::{Catalog, CatalogStore},
    error::{Result, TranslateError},
    sink::{ErrorSink, route},
    token::Matcher,
};

#[derive(Clone, Copy)]
pub struct TranslationEngine<'a> {
    store: &'a CatalogStore,
    sink: Option<&'a dyn ErrorSink>,
}

impl<'a> TranslationEngine<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store, sink: None }
    }

    /// Routes missing-catalog failures to `sink` instead of failing.
    pub fn with_sink(self, sink: &'a dyn ErrorSink) -> Self {
        Self {
            sink: Some(sink),
            ..self
        }
    }

    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }

    /// Translates `source` for `locale`.
    ///
    /// Falls back to `source` itself when the catalog has no entry for it or
    /// the entry's first form is empty.
    pub fn lookup(&self, locale: &str, source: &str) -> Result<String> {
        if source.is_empty() {
            return Err(TranslateError::EmptySourceString);
        }
        let catalog = self.resolve_catalog(locale)?;
        lookup_in(catalog.as_deref(), source)
    }

    /// Replaces every marker found by `matcher` in `text` with its translation
    /// wrapped in `bookend`.
    ///
    /// Each match replaces the first occurrence of its span in the output built
    /// so far, so repeated identical markers are consumed in document order.
    /// The catalog is only resolved once a marker is found.
    pub fn rewrite(
        &self,
        text: &str,
        locale: &str,
        matcher: &mut Matcher,
        bookend: &str,
    ) -> Result<String> {
        let mut catalog: Option<Option<Arc<Catalog>>> = None;
        let mut translated = text.to_string();

        while let Some(found) = matcher.next_match(text) {
            if catalog.is_none() {
                match self.resolve_catalog(locale) {
                    Ok(resolved) => catalog = Some(resolved),
                    Err(err) => {
                        matcher.reset();
                        return Err(err);
                    }
                }
            }
            let message = lookup_in(catalog.as_ref().and_then(Option::as_deref), found.literal)?;
            trace!(%locale, source = found.literal, %message, "replacing marker");
            let replacement = format!("{bookend}{message}{bookend}");
            translated = translated.replacen(found.span, &replacement, 1);
        }

        Ok(translated)
    }

    /// `Ok(None)` means the catalog is missing and the sink took the error.
    fn resolve_catalog(&self, locale: &str) -> Result<Option<Arc<Catalog>>> {
        match self.store.catalog(locale) {
            Ok(catalog) => Ok(Some(catalog)),
            Err(err @ TranslateError::CatalogMissing { .. }) => {
                route(self.sink, err)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn lookup_in(catalog: Option<&Catalog>, source: &str) -> Result<String> {
    if source.is_empty() {
        return Err(TranslateError::EmptySourceString);
    }
    let translated = catalog
        .and_then(|catalog| catalog.get(source))
        .and_then(|entry| entry.first_form())
        .unwrap_or(source);
    Ok(translated.to_string())
}
