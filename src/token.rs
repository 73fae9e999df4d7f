//! Tokenizer for propositional formulas.
//!
//! The token vocabulary is deliberately tiny: single-letter variables, the
//! negation marker `!`, five binary connectives and round brackets.
//! Whitespace is skipped and never produces a token.

use std::fmt;

use log::trace;

/// Kind of a [`Token`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A variable letter `A..=Z`.
    Variable,
    /// The negation marker `!`.
    SingleOp,
    /// A binary connective: one of `& | > - +`.
    DoubleOp,
    OpenBracket,
    CloseBracket,
}

/// Symbols classified as binary connectives.
pub const DOUBLE_OPS: [char; 5] = ['&', '|', '>', '-', '+'];

/// A single lexical token together with its source character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub symbol: char,
}

impl Token {
    pub fn new(kind: TokenKind, symbol: char) -> Self {
        Self { kind, symbol }
    }

    pub fn variable(symbol: char) -> Self {
        Self::new(TokenKind::Variable, symbol)
    }

    pub fn single_op(symbol: char) -> Self {
        Self::new(TokenKind::SingleOp, symbol)
    }

    pub fn double_op(symbol: char) -> Self {
        Self::new(TokenKind::DoubleOp, symbol)
    }

    /// Classifies a single non-whitespace character.
    pub fn classify(symbol: char) -> Option<Self> {
        let kind = match symbol {
            '(' => TokenKind::OpenBracket,
            ')' => TokenKind::CloseBracket,
            '!' => TokenKind::SingleOp,
            c if DOUBLE_OPS.contains(&c) => TokenKind::DoubleOp,
            c if c.is_ascii_uppercase() => TokenKind::Variable,
            _ => return None,
        };
        Some(Self::new(kind, symbol))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.kind, self.symbol)
    }
}

/// Error produced when the input contains a character outside the vocabulary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LexError {
    /// Unknown symbol at the given character position of the input.
    UnknownSymbol { symbol: char, position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnknownSymbol { symbol, position } => {
                write!(f, "unknown symbol {:?} at position {}", symbol, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Splits `input` into tokens.
///
/// Fails on the first character that is neither whitespace nor part of the
/// vocabulary; no partial token list is returned in that case.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::with_capacity(input.len());
    for (position, symbol) in input.chars().enumerate() {
        if symbol.is_whitespace() {
            continue;
        }
        let token = Token::classify(symbol).ok_or(LexError::UnknownSymbol { symbol, position })?;
        trace!("token #{} = {}", tokens.len(), token);
        tokens.push(token);
    }
    Ok(tokens)
}

/// Immutable sequence of tokens with a forward-only cursor.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Tokenizes `input` and places the cursor before the first token.
    pub fn new(input: &str) -> Result<Self, LexError> {
        Ok(Self::from_tokens(tokenize(input)?))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the next token and advances the cursor,
    /// or `None` once all tokens have been consumed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
