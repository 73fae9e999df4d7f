use std::fmt;
use std::str::FromStr;

use crate::dnf::{build_dnf, Dnf};
use crate::error::Error;
use crate::expr::Expr;
use crate::parser::Parser;
use crate::table::TruthTable;
use crate::token::{TokenKind, TokenStream};
use crate::types::{Assignment, Var};

/// A parsed formula together with its (sorted) set of variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    expr: Expr,
    variables: Vec<Var>,
}

impl Expression {
    /// Tokenizes and parses `input` with the default parser.
    ///
    /// # Example
    ///
    /// ```
    /// use dnf_rs::expression::Expression;
    ///
    /// let e = Expression::parse("A > B").unwrap();
    /// assert_eq!(e.to_dnf().unwrap(), "!A & !B || !A & B || A & B");
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with(&Parser::new(), input)
    }

    pub fn parse_with(parser: &Parser, input: &str) -> Result<Self, Error> {
        let mut tokens = TokenStream::new(input)?;

        let mut variables: Vec<Var> = tokens
            .tokens()
            .iter()
            .filter(|t| t.kind == TokenKind::Variable)
            .filter_map(|t| Var::try_new(t.symbol))
            .collect();
        variables.sort();
        variables.dedup();

        let expr = parser.parse(&mut tokens)?;
        Ok(Self { expr, variables })
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.expr.eval(assignment)
    }

    pub fn truth_table(&self) -> Result<TruthTable, Error> {
        Ok(TruthTable::generate(&self.variables, &self.expr)?)
    }

    pub fn dnf(&self) -> Result<Dnf, Error> {
        Ok(Dnf::from_rows(self.truth_table()?.satisfying()))
    }

    /// Renders the formula as the disjunction of its satisfying minterms.
    pub fn to_dnf(&self) -> Result<String, Error> {
        Ok(build_dnf(self.truth_table()?.satisfying()))
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}
