#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! A splitter for **PostgreSQL** scripts.
//!
//! Splits SQL source text holding any number of semicolon terminated statements into the
//! individual statements, without parsing the SQL grammar.
//!
//! ## Recognized constructs
//!
//! A semicolon only ends a statement at the top level. The following regions are scanned over
//! without looking for statement boundaries:
//!
//! - quoted identifiers: `"my;table"`, with `""` as the escaped quote
//! - string literals: `'a;b'`, with `''` as the escaped quote; backslashes have no special
//!   meaning
//! - dollar quoted strings: `$$ ... $$` or `$tag$ ... $tag$`, typically function bodies
//! - line comments: `-- ...` up to the end of the line
//! - block comments: `/* ... */`, which nest
//!
//! A `$` directly after an identifier character (`identifier_with_$`) or directly before a digit
//! (`$1`) does not open a dollar quoted string.
//!
//! ## Comments
//!
//! Comments found before any statement content are dropped. Once a statement has started, its
//! comments are kept verbatim, delimiters included. A comment left open at the end of the input
//! is not an error.
//!
//! ## Errors
//!
//! The input is rejected as a whole with a [`SplitError`] if it ends inside a quoted identifier,
//! a string literal or a dollar quoted string.
//!
//! ## CLI utility
//!
//! The `pgsplit-cli` package provides a `pgsplit` binary built on this crate:
//! ```sh
//! cargo install pgsplit-cli
//!
//! pgsplit schema.sql
//! pgsplit --format json migrations/*.sql
//! cat schema.sql | pgsplit --format count
//! ```
//!
//! ## Examples
//! ```rust
//! let statements = pgsplit::split_statements(
//!     "-- Creates the table.
//!     CREATE TABLE t (id int, name text);
//!     INSERT INTO t VALUES (1, 'a;b'); -- dropped, no statement has started yet
//!     ",
//! )?;
//!
//! assert_eq!(
//!     statements,
//!     [
//!         "CREATE TABLE t (id int, name text)",
//!         "INSERT INTO t VALUES (1, 'a;b')",
//!     ]
//! );
//! # Ok::<(), pgsplit::SplitError>(())
//! ```
//!
//! Function bodies are kept in one piece:
//! ```rust
//! let statements = pgsplit::split_statements(
//!     "CREATE FUNCTION one() RETURNS int AS $body$
//!     BEGIN
//!         RETURN 1;
//!     END;
//!     $body$ LANGUAGE plpgsql;",
//! )?;
//!
//! assert_eq!(statements.len(), 1);
//! # Ok::<(), pgsplit::SplitError>(())
//! ```
//!
//! Unterminated quotes are reported by kind:
//! ```rust
//! use pgsplit::{split_statements, SplitError};
//!
//! assert_eq!(
//!     split_statements("SELECT $$never closed"),
//!     Err(SplitError::UnterminatedDollarQuotedString)
//! );
//! ```

pub use pgsplit_impl::{chars, split_statements, SplitError};
