use std::io;

use pgsplit::SplitError;
use thiserror::Error as ThisError;

/// Errors that abort a `pgsplit` run.
#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("could not read {input}: {source}")]
    Read { input: String, source: io::Error },
    #[error("could not split {input}: {source}")]
    Split { input: String, source: SplitError },
    #[error("could not write output: {0}")]
    Write(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
