//! Parsing of textual command sequences
//!
//! A line holds comma-separated tokens; each token is a shape identifier
//! followed by a single start-column digit, e.g. `Q0,T1,I6`. Only the token
//! syntax is checked here. Whether the identifier names a real shape is left
//! to the catalog, so unknown shapes surface as engine errors.

use thiserror::Error;

use crate::types::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command token")]
    EmptyToken,

    #[error("command {0:?} is not a shape followed by one column digit")]
    BadLength(String),

    #[error("command {0:?} has a non-digit start column")]
    BadColumn(String),
}

/// Parse one token such as `"T4"`
///
/// Surrounding whitespace (including a trailing line ending) is ignored.
pub fn parse_command(token: &str) -> Result<Command, ParseError> {
    let token = token.trim();
    let mut chars = token.chars();

    let (Some(shape), Some(column), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(if token.is_empty() {
            ParseError::EmptyToken
        } else {
            ParseError::BadLength(token.to_string())
        });
    };

    let start_column = column
        .to_digit(10)
        .ok_or_else(|| ParseError::BadColumn(token.to_string()))?;

    Ok(Command::new(shape, start_column as usize))
}

/// Parse a full comma-separated line
pub fn parse_line(line: &str) -> Result<Vec<Command>, ParseError> {
    line.split(',').map(parse_command).collect()
}
