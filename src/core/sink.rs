//! Optional error channel for the engine.
//!
//! When a sink is attached, recoverable failures (a locale without a catalog)
//! are handed to it and processing continues with a degraded result. Without a
//! sink the same failures abort the current operation.

use std::sync::{Mutex, PoisonError};

use crate::core::error::{Result, TranslateError};

pub trait ErrorSink: Send + Sync {
    fn report(&self, error: TranslateError);
}

/// Sink that keeps every reported error for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    errors: Mutex<Vec<TranslateError>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the collected errors in report order.
    pub fn take(&self) -> Vec<TranslateError> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, error: TranslateError) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
    }
}

/// Hands `error` to the sink when one is attached, otherwise returns it.
pub(crate) fn route(sink: Option<&dyn ErrorSink>, error: TranslateError) -> Result<()> {
    match sink {
        Some(sink) => {
            sink.report(error);
            Ok(())
        }
        None => Err(error),
    }
}
