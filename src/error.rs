use std::fmt;

use crate::parser::ParseError;
use crate::table::TableError;
use crate::token::LexError;

/// Error type for the whole parse-evaluate-render pipeline.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Unknown character in the input.
    Lex(LexError),
    /// Malformed token structure.
    Parse(ParseError),
    /// Truth table could not be enumerated.
    Table(TableError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "Lex error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Table(e) => write!(f, "Table error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Table(e) => Some(e),
        }
    }
}
