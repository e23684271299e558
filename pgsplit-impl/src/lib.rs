#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! **PostgreSQL** statement splitter implementation.

pub mod chars;
mod error;
mod splitter;

pub use error::SplitError;
pub use splitter::split_statements;
