use thiserror::Error as ThisError;

/// Error returned when the input ends inside a quoted region.
///
/// Unterminated comments are not errors, only quotes are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
pub enum SplitError {
    #[error("unterminated double quoted identifier")]
    UnterminatedDoubleQuotedIdentifier,
    #[error("unterminated single quoted string")]
    UnterminatedSingleQuotedString,
    #[error("unterminated dollar quoted string")]
    UnterminatedDollarQuotedString,
}
