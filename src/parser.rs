//! Recursive-descent parser for propositional formulas.
//!
//! # Grammar
//!
//! ```text
//! E = P | P D E          -- right-associative chain
//! P = V | S P | '(' E ')'
//! V = A..Z,  S = '!',  D = & | '|' | > | - | +
//! ```
//!
//! There is no precedence between connectives: a chain groups to the right,
//! so `A & B | C` is `A & (B | C)`. Negation binds to the single operand that
//! follows it, so `!A & B` is `(!A) & B` while `!(A & B)` negates the group.
//!
//! A closing bracket is never silently swallowed. When it shows up where an
//! operand should start, [`Operand::Terminator`] is reported to the caller;
//! when it ends a chain, the chain comes back as [`ParseOutcome::Closed`].
//! Only the open-bracket handler accepts a closed chain.

use std::fmt;

use log::{debug, trace};

use crate::expr::{Expr, Op};
use crate::token::{Token, TokenKind, TokenStream};
use crate::types::Var;

/// Default bound on the parser recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Structural error in a token stream.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains no tokens at all.
    EmptyInput,
    /// The input ended where an operand was required.
    UnexpectedEnd,
    /// A token that cannot start an operand.
    UnexpectedToken(char),
    /// A token after an operand that is not a binary connective.
    UnknownOperator(char),
    /// An opening bracket without a matching `)`.
    UnmatchedOpen,
    /// A closing bracket without a matching `(`.
    UnmatchedClose,
    /// A bracket pair with nothing inside.
    EmptyGroup,
    /// Nesting exceeds the parser depth limit.
    TooDeep { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input"),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseError::UnexpectedToken(c) => write!(f, "unexpected token {}", c),
            ParseError::UnknownOperator(c) => write!(f, "unknown operator {}", c),
            ParseError::UnmatchedOpen => write!(f, "unmatched ("),
            ParseError::UnmatchedClose => write!(f, "unmatched )"),
            ParseError::EmptyGroup => write!(f, "empty brackets ()"),
            ParseError::TooDeep { limit } => write!(f, "expression nested deeper than {}", limit),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of parsing a single operand (the `P` rule).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Operand {
    Node(Expr),
    /// A `)` was found where an operand should begin. It has been consumed.
    Terminator,
}

/// Result of parsing a chain (the `E` rule).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseOutcome {
    /// The chain ran until the end of input.
    Complete(Expr),
    /// The chain was ended by a `)`, which has been consumed.
    Closed(Expr),
    /// A `)` was found where the chain should begin. It has been consumed.
    Terminator,
}

#[derive(Debug, Clone)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser that rejects input nested deeper than `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses the whole stream into a single expression.
    pub fn parse(&self, tokens: &mut TokenStream) -> Result<Expr, ParseError> {
        let expr = match self.parse_expr(tokens, 0)? {
            ParseOutcome::Complete(expr) => expr,
            ParseOutcome::Closed(_) => return Err(ParseError::UnmatchedClose),
            ParseOutcome::Terminator => return Err(ParseError::UnexpectedToken(')')),
        };
        debug!("parsed {} tokens into {}", tokens.consumed(), expr);
        Ok(expr)
    }

    /// Parses `E = P | P D E`.
    pub fn parse_expr(&self, tokens: &mut TokenStream, depth: usize) -> Result<ParseOutcome, ParseError> {
        self.check_depth(depth)?;
        trace!("parse_expr(depth = {}, at = {})", depth, tokens.consumed());

        let lhs = match self.parse_operand(tokens, depth)? {
            Operand::Node(expr) => expr,
            Operand::Terminator => return Ok(ParseOutcome::Terminator),
        };

        let Some(token) = tokens.next() else {
            return Ok(ParseOutcome::Complete(lhs));
        };

        match token.kind {
            TokenKind::CloseBracket => Ok(ParseOutcome::Closed(lhs)),
            TokenKind::DoubleOp => {
                let op = Op::from_symbol(token.symbol).ok_or(ParseError::UnknownOperator(token.symbol))?;
                match self.parse_expr(tokens, depth + 1)? {
                    ParseOutcome::Complete(rhs) => Ok(ParseOutcome::Complete(Expr::binary(lhs, op, rhs))),
                    ParseOutcome::Closed(rhs) => Ok(ParseOutcome::Closed(Expr::binary(lhs, op, rhs))),
                    ParseOutcome::Terminator => Err(ParseError::UnexpectedToken(')')),
                }
            }
            _ => Err(ParseError::UnknownOperator(token.symbol)),
        }
    }

    /// Parses `P = V | S P | '(' E ')'`.
    pub fn parse_operand(&self, tokens: &mut TokenStream, depth: usize) -> Result<Operand, ParseError> {
        self.check_depth(depth)?;

        let Some(token) = tokens.next() else {
            return Err(if tokens.consumed() == 0 {
                ParseError::EmptyInput
            } else {
                ParseError::UnexpectedEnd
            });
        };

        match token.kind {
            TokenKind::Variable => Ok(Operand::Node(Expr::Var(variable(token)?))),
            TokenKind::SingleOp => match self.parse_operand(tokens, depth + 1)? {
                Operand::Node(inner) => Ok(Operand::Node(Expr::not(inner))),
                Operand::Terminator => Err(ParseError::UnexpectedToken(')')),
            },
            TokenKind::OpenBracket => match self.parse_expr(tokens, depth + 1) {
                Ok(ParseOutcome::Closed(inner)) => Ok(Operand::Node(inner)),
                Ok(ParseOutcome::Complete(_)) => Err(ParseError::UnmatchedOpen),
                Ok(ParseOutcome::Terminator) => Err(ParseError::EmptyGroup),
                // The input ran out inside the group, so the group is unclosed.
                Err(ParseError::UnexpectedEnd) => Err(ParseError::UnmatchedOpen),
                Err(e) => Err(e),
            },
            TokenKind::CloseBracket => Ok(Operand::Terminator),
            TokenKind::DoubleOp => Err(ParseError::UnexpectedToken(token.symbol)),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeep { limit: self.max_depth });
        }
        Ok(())
    }
}

fn variable(token: Token) -> Result<Var, ParseError> {
    Var::try_new(token.symbol).ok_or(ParseError::UnexpectedToken(token.symbol))
}

/// Parses a token stream with the default parser.
pub fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
    Parser::new().parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn parse_str(input: &str) -> Result<Expr, ParseError> {
        let mut tokens = TokenStream::new(input).unwrap();
        parse(&mut tokens)
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_str("A"), Ok(Expr::var('A')));
        assert_eq!(parse_str("(A)"), Ok(Expr::var('A')));
        assert_eq!(parse_str("((Z))"), Ok(Expr::var('Z')));
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_str("A & B"), Ok(Expr::and(Expr::var('A'), Expr::var('B'))));
        assert_eq!(parse_str("A > B"), Ok(Expr::implies(Expr::var('A'), Expr::var('B'))));
        assert_eq!(parse_str("A - B"), Ok(Expr::equiv(Expr::var('A'), Expr::var('B'))));
        assert_eq!(parse_str("A + B"), Ok(Expr::xor(Expr::var('A'), Expr::var('B'))));
    }

    #[test]
    fn test_right_associative_chain() {
        let expected = Expr::and(Expr::var('A'), Expr::and(Expr::var('B'), Expr::var('C')));
        assert_eq!(parse_str("A & B & C"), Ok(expected));
        let expected = Expr::and(Expr::var('A'), Expr::or(Expr::var('B'), Expr::var('C')));
        assert_eq!(parse_str("A & B | C"), Ok(expected));
    }

    #[test]
    fn test_groups() {
        let expected = Expr::or(Expr::and(Expr::var('A'), Expr::var('B')), Expr::var('C'));
        assert_eq!(parse_str("(A & B) | C"), Ok(expected));
        let expected = Expr::and(Expr::var('A'), Expr::or(Expr::var('B'), Expr::var('C')));
        assert_eq!(parse_str("A & (B | C)"), Ok(expected));
        let expected = Expr::xor(
            Expr::or(Expr::var('A'), Expr::var('B')),
            Expr::and(Expr::var('C'), Expr::var('D')),
        );
        assert_eq!(parse_str("(A | B) + (C & D)"), Ok(expected));
    }

    #[test]
    fn test_negation_binds_to_operand() {
        let expected = Expr::and(Expr::not(Expr::var('A')), Expr::var('B'));
        assert_eq!(parse_str("!A & B"), Ok(expected));
        let expected = Expr::not(Expr::and(Expr::var('A'), Expr::var('B')));
        assert_eq!(parse_str("!(A & B)"), Ok(expected));
        assert_eq!(parse_str("!!A"), Ok(Expr::not(Expr::not(Expr::var('A')))));
        let expected = Expr::or(Expr::var('A'), Expr::not(Expr::var('B')));
        assert_eq!(parse_str("A | !B"), Ok(expected));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_str(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_str("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_unexpected_end() {
        assert_eq!(parse_str("A &"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_str("!"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_unmatched_brackets() {
        assert_eq!(parse_str("(A & B"), Err(ParseError::UnmatchedOpen));
        assert_eq!(parse_str("(A &"), Err(ParseError::UnmatchedOpen));
        assert_eq!(parse_str("((A) | B"), Err(ParseError::UnmatchedOpen));
        assert_eq!(parse_str("A)"), Err(ParseError::UnmatchedClose));
        assert_eq!(parse_str("(A & B))"), Err(ParseError::UnmatchedClose));
        assert_eq!(parse_str("A & B) | C"), Err(ParseError::UnmatchedClose));
    }

    #[test]
    fn test_stray_close_bracket() {
        assert_eq!(parse_str(")"), Err(ParseError::UnexpectedToken(')')));
        assert_eq!(parse_str("A & )"), Err(ParseError::UnexpectedToken(')')));
        assert_eq!(parse_str("!)"), Err(ParseError::UnexpectedToken(')')));
        assert_eq!(parse_str("()"), Err(ParseError::EmptyGroup));
        assert_eq!(parse_str("A & ()"), Err(ParseError::EmptyGroup));
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(parse_str("AB"), Err(ParseError::UnknownOperator('B')));
        assert_eq!(parse_str("A !B"), Err(ParseError::UnknownOperator('!')));
        assert_eq!(parse_str("A (B)"), Err(ParseError::UnknownOperator('(')));
        assert_eq!(parse_str("(A) B"), Err(ParseError::UnknownOperator('B')));
    }

    #[test]
    fn test_unexpected_token() {
        assert_eq!(parse_str("&A"), Err(ParseError::UnexpectedToken('&')));
        assert_eq!(parse_str("A & | B"), Err(ParseError::UnexpectedToken('|')));
        assert_eq!(parse_str("!&"), Err(ParseError::UnexpectedToken('&')));
    }

    #[test]
    fn test_unknown_double_op_symbol() {
        // Only reachable with hand-built token streams.
        let mut tokens = TokenStream::from_tokens(vec![Token::variable('A'), Token::double_op('^'), Token::variable('B')]);
        assert_eq!(parse(&mut tokens), Err(ParseError::UnknownOperator('^')));
    }

    #[test]
    fn test_depth_limit() {
        let parser = Parser::with_max_depth(4);
        let mut tokens = TokenStream::new("!!A").unwrap();
        assert!(parser.parse(&mut tokens).is_ok());

        let mut tokens = TokenStream::new("!!!!!!!!A").unwrap();
        assert_eq!(parser.parse(&mut tokens), Err(ParseError::TooDeep { limit: 4 }));

        let mut tokens = TokenStream::new("A & B & C & D & E & F & G").unwrap();
        assert_eq!(parser.parse(&mut tokens), Err(ParseError::TooDeep { limit: 4 }));
    }

    #[test]
    fn test_default_depth_limit() {
        let deep = format!("{}A{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(parse_str(&deep), Err(ParseError::TooDeep { limit: DEFAULT_MAX_DEPTH }));

        let shallow = format!("{}A{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(parse_str(&shallow), Ok(Expr::var('A')));
    }

    #[test]
    fn test_display_reparses() {
        for input in ["A & B & C", "(A & B) | C", "!(A > B) - !C", "A + (B | !(C & D))"] {
            let expr = parse_str(input).unwrap();
            let printed = expr.to_string();
            assert_eq!(parse_str(&printed), Ok(expr), "{:?} printed as {:?}", input, printed);
        }
    }
}
