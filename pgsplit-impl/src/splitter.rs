use std::mem;

use crate::{
    chars::{is_all_whitespace, is_identifier_continuation, trim_whitespace},
    error::SplitError,
};

/// Splits `input` into individual SQL statements.
///
/// Statements are separated by top level semicolons, meaning semicolons that are not inside a
/// quoted identifier, a string literal, a dollar quoted string or a comment. Comments that
/// precede any statement content are dropped, while comments found after the statement has
/// started are kept verbatim.
///
/// The returned statements are trimmed of surrounding whitespace and empty statements are
/// discarded.
///
/// # Errors
///
/// Returns a [`SplitError`] if the input ends inside a quoted identifier, a string literal or a
/// dollar quoted string. No statements are returned in that case.
pub fn split_statements(input: &str) -> Result<Vec<String>, SplitError> {
    let chars = input.chars().collect::<Vec<_>>();

    let untrimmed = Scanner::new(&chars)
        .run()
        .inspect_err(|e| tracing::debug!("failed to split statements: {e}"))?;

    let statements = untrimmed
        .iter()
        .map(|s| trim_whitespace(s))
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();

    tracing::debug!("split input into {} statements", statements.len());
    Ok(statements)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Statement,
    CStyleComment,
    SqlComment,
    DollarQuotedTag,
    DollarQuoted,
    DoubleQuoted,
    SingleQuoted,
}

/// Single pass scanner over the input characters.
///
/// Every step consumes one character, looking at most one character behind and one ahead.
/// Two character tokens (`--`, `/*`, `*/`, escaped quotes) and the closing tag of a dollar
/// quoted string are skipped over by advancing `pos` past them.
#[derive(Debug)]
struct Scanner<'a> {
    input: &'a [char],
    pos: usize,
    state: State,
    current: String,
    statements: Vec<String>,
    /// Characters between the opening `$` and the closing `$` of a dollar quote tag, the
    /// closing `$` included.
    tag: Vec<char>,
    /// Whether the comment being scanned preceded any statement content.
    ignore_comment: bool,
    comment_depth: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [char]) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Statement,
            current: String::new(),
            statements: Vec::new(),
            tag: Vec::new(),
            ignore_comment: false,
            comment_depth: 0,
        }
    }

    /// Scans the whole input and returns the untrimmed statements.
    fn run(mut self) -> Result<Vec<String>, SplitError> {
        while let Some(&cur) = self.input.get(self.pos) {
            let prev = self
                .pos
                .checked_sub(1)
                .and_then(|i| self.input.get(i))
                .copied();

            self.pos += 1;
            let next = self.input.get(self.pos).copied();

            match self.state {
                State::Statement => self.statement(prev, cur, next),
                State::DoubleQuoted => self.quoted('"', cur, next),
                State::SingleQuoted => self.quoted('\'', cur, next),
                State::DollarQuotedTag => self.dollar_quoted_tag(cur),
                State::DollarQuoted => self.dollar_quoted(cur),
                State::SqlComment => self.sql_comment(cur),
                State::CStyleComment => self.c_style_comment(cur, next),
            }
        }

        match self.state {
            // Trailing comments need no terminator.
            State::Statement | State::CStyleComment | State::SqlComment => (),
            State::DoubleQuoted => return Err(SplitError::UnterminatedDoubleQuotedIdentifier),
            State::SingleQuoted => return Err(SplitError::UnterminatedSingleQuotedString),
            State::DollarQuotedTag | State::DollarQuoted => {
                return Err(SplitError::UnterminatedDollarQuotedString);
            }
        }

        self.statements.push(self.current);
        Ok(self.statements)
    }

    fn statement(&mut self, prev: Option<char>, cur: char, next: Option<char>) {
        match (cur, next) {
            ('"', _) => {
                self.current.push(cur);
                self.state = State::DoubleQuoted;
            }
            ('\'', _) => {
                self.current.push(cur);
                self.state = State::SingleQuoted;
            }
            (';', _) => {
                let statement = mem::take(&mut self.current);
                tracing::trace!("statement boundary at character {}", self.pos - 1);
                self.statements.push(statement);
            }
            ('-', Some('-')) => self.enter_comment(State::SqlComment, "--"),
            ('/', Some('*')) => {
                self.comment_depth = 1;
                self.enter_comment(State::CStyleComment, "/*");
            }
            ('$', _) => {
                self.current.push(cur);

                // A `$` continuing an identifier (`identifier_with_$`) or introducing a
                // positional parameter (`$1`) does not open a dollar quoted string.
                let continues_identifier = prev.is_some_and(is_identifier_continuation);
                let is_parameter = next.is_some_and(|c| c.is_ascii_digit());

                if !continues_identifier && !is_parameter {
                    self.tag.clear();
                    self.state = State::DollarQuotedTag;
                }
            }
            _ => self.current.push(cur),
        }
    }

    /// Enters a comment whose two character opener was just seen.
    ///
    /// The comment is dropped if nothing but whitespace was accumulated so far.
    fn enter_comment(&mut self, state: State, opener: &str) {
        self.state = state;
        self.ignore_comment = is_all_whitespace(&self.current);

        if !self.ignore_comment {
            self.current.push_str(opener);
        }

        self.pos += 1;
    }

    /// Handles both quoted identifiers and string literals; a doubled quote is an escape.
    fn quoted(&mut self, quote: char, cur: char, next: Option<char>) {
        self.current.push(cur);

        if cur == quote {
            if next == Some(quote) {
                self.current.push(quote);
                self.pos += 1;
            } else {
                self.state = State::Statement;
            }
        }
    }

    fn dollar_quoted_tag(&mut self, cur: char) {
        self.current.push(cur);
        self.tag.push(cur);

        if cur == '$' {
            self.state = State::DollarQuoted;
        }
    }

    fn dollar_quoted(&mut self, cur: char) {
        self.current.push(cur);

        if cur != '$' {
            return;
        }

        let end = self.pos + self.tag.len();

        if self.input.get(self.pos..end) == Some(self.tag.as_slice()) {
            self.current.extend(&self.tag);
            self.pos = end;
            self.state = State::Statement;
        }
    }

    fn sql_comment(&mut self, cur: char) {
        if !self.ignore_comment || cur == '\n' {
            self.current.push(cur);
        }

        if cur == '\n' {
            self.state = State::Statement;
        }
    }

    fn c_style_comment(&mut self, cur: char, next: Option<char>) {
        debug_assert!(self.comment_depth >= 1, "C-style comment depth underflow");

        if !self.ignore_comment {
            self.current.push(cur);
        }

        match (cur, next) {
            ('/', Some('*')) => {
                self.comment_depth += 1;
                self.skip_comment_char('*');
            }
            ('*', Some('/')) => {
                self.comment_depth -= 1;
                self.skip_comment_char('/');

                if self.comment_depth == 0 {
                    self.state = State::Statement;
                }
            }
            _ => (),
        }
    }

    fn skip_comment_char(&mut self, c: char) {
        if !self.ignore_comment {
            self.current.push(c);
        }

        self.pos += 1;
    }
}
