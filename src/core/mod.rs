//! Translation engine.
//!
//! ## Module Structure
//!
//! - `locale`: locale code to output prefix
//! - `catalog`: locale discovery and memoized catalog loading
//! - `parsers`: catalog file readers
//! - `token`: per-file-type marker patterns and matchers
//! - `engine`: lookup with fallback and marker rewriting
//! - `fanout`: one request to one result per locale
//! - `sink`: optional error channel
//! - `error`: error kinds

pub mod catalog;
pub mod engine;
pub mod error;
pub mod fanout;
pub mod locale;
pub mod parsers;
pub mod sink;
pub mod token;

pub use catalog::{Catalog, CatalogStore, Locale, TranslationEntry};
pub use engine::TranslationEngine;
pub use error::TranslateError;
pub use fanout::{
    Downstream, FanoutState, FanoutStream, FanoutTransformer, ItemAck, TranslationRequest,
    TranslationResult,
};
pub use locale::{DEFAULT_LOCALE, lang_prefix};
pub use sink::{CollectingSink, ErrorSink};
pub use token::{FileType, FileTypeRule, MarkerMatch, Matcher, bookend, token_regex};
