use std::io::Write;

use serde::Serialize;

use crate::{error::CliError, opt::OutputFormat};

#[derive(Debug, Serialize)]
struct SplitOutput<'a> {
    source: &'a str,
    statements: &'a [String],
}

/// Writes the statements split from one input.
pub(crate) fn write_statements<W: Write>(
    out: &mut W,
    format: OutputFormat,
    separator: &str,
    source: &str,
    statements: &[String],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            for statement in statements {
                write!(out, "{statement}{separator}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &SplitOutput { source, statements })?;
            writeln!(out)?;
        }
        OutputFormat::Count => writeln!(out, "{source}: {}", statements.len())?,
    }

    Ok(())
}
