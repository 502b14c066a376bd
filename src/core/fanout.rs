//! One request in, one translated copy per locale out.
//!
//! [`FanoutTransformer::fan_out`] handles a single item: it emits every locale's
//! result to a [`Downstream`] and only then signals it may resume.
//! [`FanoutStream`] drives the same logic as a pull-based iterator that never
//! asks upstream for the next item before the current one is fully delivered.

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    catalog::Locale,
    engine::TranslationEngine,
    error::{Result, TranslateError},
    token::{FileType, bookend, token_regex},
};

/// An asset to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub content: String,
    pub file_type: FileType,
    /// Location relative to the source root, used when writing results.
    pub path: Option<PathBuf>,
}

impl TranslationRequest {
    pub fn new(content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            content: content.into(),
            file_type,
            path: None,
        }
    }

    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }
}

/// The translated copy of a request for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub lang: Locale,
    pub translation: String,
}

/// Receiver of per-locale results.
pub trait Downstream {
    fn emit(&mut self, result: TranslationResult) -> Result<()>;

    /// Called once every locale of the current item has been emitted.
    fn resume(&mut self) {}
}

impl Downstream for Vec<TranslationResult> {
    fn emit(&mut self, result: TranslationResult) -> Result<()> {
        self.push(result);
        Ok(())
    }
}

impl Downstream for VecDeque<TranslationResult> {
    fn emit(&mut self, result: TranslationResult) -> Result<()> {
        self.push_back(result);
        Ok(())
    }
}

/// Completion notice for one processed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAck {
    pub emitted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanoutState {
    Idle,
    Translating,
    Done,
}

pub struct FanoutTransformer<'a> {
    engine: TranslationEngine<'a>,
    received: AtomicUsize,
}

impl<'a> FanoutTransformer<'a> {
    pub fn new(engine: TranslationEngine<'a>) -> Self {
        Self {
            engine,
            received: AtomicUsize::new(0),
        }
    }

    pub fn engine(&self) -> &TranslationEngine<'a> {
        &self.engine
    }

    /// Number of items received so far.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::Relaxed)
    }

    /// Emits one [`TranslationResult`] per locale for `request`, in locale order.
    pub fn fan_out<D>(&self, request: &TranslationRequest, downstream: &mut D) -> Result<ItemAck>
    where
        D: Downstream + ?Sized,
    {
        self.received.fetch_add(1, Ordering::Relaxed);

        // resolve the type first: an unsupported type fails even without locales
        let matcher = token_regex(request.file_type)?;
        let bookend = bookend(request.file_type);
        let locales = self.engine.store().locales()?;

        let mut emitted = 0;
        for locale in locales.iter() {
            let mut scan = matcher.clone();
            let translation = self
                .engine
                .rewrite(&request.content, locale, &mut scan, bookend)?;
            downstream.emit(TranslationResult {
                lang: locale.clone(),
                translation,
            })?;
            emitted += 1;
        }

        downstream.resume();
        debug!(
            path = ?request.path,
            file_type = %request.file_type,
            emitted,
            "item translated"
        );
        Ok(ItemAck { emitted })
    }

    /// Fails with [`TranslateError::NoInputReceived`] when no item was ever processed.
    pub fn finish(&self) -> Result<()> {
        if self.received() == 0 {
            return Err(TranslateError::NoInputReceived);
        }
        Ok(())
    }

    pub fn stream<I>(&self, upstream: I) -> FanoutStream<'_, 'a, I::IntoIter>
    where
        I: IntoIterator<Item = TranslationRequest>,
    {
        FanoutStream {
            transformer: self,
            upstream: upstream.into_iter(),
            pending: VecDeque::new(),
            state: FanoutState::Idle,
        }
    }
}

/// Iterator over the results of every upstream request.
///
/// Yields `Err(NoInputReceived)` once if upstream turned out to be empty.
pub struct FanoutStream<'t, 'a, I> {
    transformer: &'t FanoutTransformer<'a>,
    upstream: I,
    pending: VecDeque<TranslationResult>,
    state: FanoutState,
}

impl<I> FanoutStream<'_, '_, I> {
    pub fn state(&self) -> FanoutState {
        self.state
    }
}

impl<I> Iterator for FanoutStream<'_, '_, I>
where
    I: Iterator<Item = TranslationRequest>,
{
    type Item = Result<TranslationResult>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(result) = self.pending.pop_front() {
                return Some(Ok(result));
            }

            match self.state {
                FanoutState::Done => return None,
                FanoutState::Translating => self.state = FanoutState::Idle,
                FanoutState::Idle => {}
            }

            let Some(request) = self.upstream.next() else {
                self.state = FanoutState::Done;
                return self.transformer.finish().err().map(Err);
            };

            self.state = FanoutState::Translating;
            if let Err(err) = self.transformer.fan_out(&request, &mut self.pending) {
                self.pending.clear();
                self.state = FanoutState::Idle;
                return Some(Err(err));
            }
        }
    }
}
