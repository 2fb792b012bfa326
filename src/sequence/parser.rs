// Reference String Parser
//
// Splits a reference string into page ids. Commas, semicolons and
// whitespace all act as separators, in any mix and any run length.

use thiserror::Error;

use crate::common::types::PageId;

/// Reference-string parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid page reference '{0}': not an integer")]
    InvalidReference(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Parse a reference string into a sequence of page ids.
///
/// Adjacent separators collapse, so `"1,,2"` and `"1 ; 2"` both yield two
/// references. An input containing no tokens at all parses to an empty
/// sequence rather than an error.
pub fn parse_sequence(input: &str) -> ParseResult<Vec<PageId>> {
    input
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| ParseError::InvalidReference(token.to_string()))
        })
        .collect()
}
