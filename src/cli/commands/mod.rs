pub mod build;
mod command_result;
pub mod context;
pub mod init;
pub mod locales;
pub mod lookup;
pub mod translate;

pub use command_result::*;
