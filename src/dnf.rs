//! Disjunctive normal form as the sum of satisfying minterms.
//!
//! Each satisfying row of a truth table becomes one conjunction of literals,
//! listing every variable of the row in alphabetical order. No simplification
//! is attempted: the result is the canonical full-assignment DNF.

use std::fmt;

use crate::table::Row;
use crate::types::Var;

/// Separator between conjunction terms.
pub const OR_SEPARATOR: &str = " || ";
/// Separator between literals inside a term.
pub const AND_SEPARATOR: &str = " & ";

/// A possibly negated variable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Literal {
    pub var: Var,
    pub positive: bool,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            write!(f, "!")?;
        }
        write!(f, "{}", self.var)
    }
}

/// Conjunction of literals.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Builds the minterm of a row.
    pub fn from_row(row: &Row) -> Self {
        let literals = row
            .assignment
            .iter()
            .map(|(var, positive)| Literal { var, positive })
            .collect();
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", AND_SEPARATOR)?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Disjunction of terms. An empty disjunction is unsatisfiable.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Dnf {
    terms: Vec<Term>,
}

impl Dnf {
    /// Keeps the satisfying rows, in their original order.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let terms = rows.into_iter().filter(|row| row.result).map(|row| Term::from_row(&row)).collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", OR_SEPARATOR)?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

/// Renders the satisfying rows as a DNF string.
///
/// Rows are consumed one at a time; no intermediate [`Dnf`] is built.
/// Returns an empty string if no row is satisfying.
pub fn build_dnf(rows: impl IntoIterator<Item = Row>) -> String {
    let mut out = String::new();
    for (n, row) in rows.into_iter().filter(|row| row.result).enumerate() {
        if n > 0 {
            out.push_str(OR_SEPARATOR);
        }
        for (i, (var, value)) in row.assignment.iter().enumerate() {
            if i > 0 {
                out.push_str(AND_SEPARATOR);
            }
            if !value {
                out.push('!');
            }
            out.push(var.name());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::expr::Expr;
    use crate::table::TruthTable;

    fn table(names: &str, expr: &Expr) -> TruthTable {
        let vars: Vec<Var> = names.chars().map(Var::new).collect();
        TruthTable::generate(&vars, expr).unwrap()
    }

    #[test]
    fn test_single_variable() {
        let t = table("A", &Expr::var('A'));
        assert_eq!(build_dnf(t.rows()), "A");
        let t = table("A", &Expr::not(Expr::var('A')));
        assert_eq!(build_dnf(t.rows()), "!A");
    }

    #[test]
    fn test_implication() {
        let t = table("AB", &Expr::implies(Expr::var('A'), Expr::var('B')));
        assert_eq!(build_dnf(t.rows()), "!A & !B || !A & B || A & B");
    }

    #[test]
    fn test_contradiction_is_empty() {
        let a = Expr::var('A');
        let t = table("A", &Expr::and(a.clone(), Expr::not(a)));
        let dnf = Dnf::from_rows(t.rows());
        assert!(dnf.is_empty());
        assert_eq!(build_dnf(t.rows()), "");
    }

    #[test]
    fn test_tautology_has_every_row() {
        let a = Expr::var('A');
        let b = Expr::var('B');
        let expr = Expr::or(Expr::or(a.clone(), Expr::not(a)), b);
        let t = table("AB", &expr);
        let s = build_dnf(t.rows());
        assert_eq!(s.matches(OR_SEPARATOR).count(), 3);
        assert_eq!(s, "!A & !B || A & !B || !A & B || A & B");
    }

    #[test]
    fn test_dnf_display_matches_build_dnf() {
        let expr = Expr::or(Expr::equiv(Expr::var('A'), Expr::var('B')), Expr::not(Expr::var('C')));
        let t = table("ABC", &expr);
        assert_eq!(Dnf::from_rows(t.rows()).to_string(), build_dnf(t.rows()));
        assert_eq!(build_dnf(t.satisfying()), build_dnf(t.rows()));
    }

    #[test]
    fn test_terms_structure() {
        let t = table("AB", &Expr::xor(Expr::var('A'), Expr::var('B')));
        let dnf = Dnf::from_rows(t.rows());
        assert_eq!(dnf.terms().len(), 2);
        let first = &dnf.terms()[0];
        assert_eq!(
            first.literals(),
            &[
                Literal { var: Var::new('A'), positive: true },
                Literal { var: Var::new('B'), positive: false },
            ]
        );
    }
}
