//! statici18n - build-time static translation of script assets
//!
//! Given a script containing `gettext('...')` markers and a directory of gettext
//! catalogs, statici18n produces one translated copy of the script per locale.
//!
//! ## Module Structure
//!
//! - `core`: Translation engine (catalogs, markers, lookup, fan-out)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Source tree scanning
//! - `writer`: Placement of translated copies under the output root
//! - `cli`: Command-line interface layer
//! - `logging`: Diagnostic logging setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod scanner;
pub mod writer;
