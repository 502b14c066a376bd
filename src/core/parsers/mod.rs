//! Catalog file readers.
//!
//! - `po`: gettext `.po` catalogs (parsed with `polib`)

pub mod po;
