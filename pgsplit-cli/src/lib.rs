#![cfg_attr(not(test), warn(unused_crate_dependencies))]
//! Command-line utility for `pgsplit`.

mod error;
mod logging;
mod opt;
mod output;

use std::{
    ffi::OsString,
    io::{self, Read, Write},
};

pub use error::CliError;
pub use logging::{init_tracing, LOG_ENV};
pub use opt::{Opt, OutputFormat};

/// Loads `.env` from the current directory unless `--no-dotenv` was passed.
///
/// Runs before argument parsing so that the file can provide [`LOG_ENV`].
pub fn maybe_apply_dotenv() {
    if is_dotenv_disabled(std::env::args_os()) {
        return;
    }

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("{} failed to load .env: {e}", console::style("warning:").yellow());
        }
    }
}

/// Looks for `--no-dotenv` without requiring the arguments to be valid Unicode.
fn is_dotenv_disabled<I>(args: I) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().any(|arg| arg == "--no-dotenv")
}

/// Splits every input of `opt` and prints the statements to standard output.
///
/// # Errors
///
/// Fails on the first input that cannot be read or split, or if writing the output fails.
pub fn run(opt: &Opt) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_with(opt, io::stdin().lock(), &mut stdout)
}

/// Same as [`run`], reading standard input from `stdin` and writing to `out`.
///
/// # Errors
///
/// Fails on the first input that cannot be read or split, or if writing the output fails.
pub fn run_with<R, W>(opt: &Opt, mut stdin: R, out: &mut W) -> Result<(), CliError>
where
    R: Read,
    W: Write,
{
    for source in opt.sources() {
        let name = source.to_string();
        let sql = source.read(&mut stdin)?;

        let statements = pgsplit::split_statements(&sql).map_err(|error| CliError::Split {
            input: name.clone(),
            source: error,
        })?;

        tracing::info!("{name}: {} statements", statements.len());
        output::write_statements(out, opt.format, &opt.separator, &name, &statements)?;
    }

    out.flush()?;
    Ok(())
}
