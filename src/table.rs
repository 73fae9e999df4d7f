//! Truth tables of propositional formulas.
//!
//! A table over `n` variables stores one result bit per input mask, `2^n` bits
//! in total. Bit `i` of a mask is the value of the `i`-th variable in
//! alphabetical order, so the first variable toggles fastest. Rows (with their
//! assignments) are decoded from the mask on demand.

use std::fmt;

use bitvec::prelude::*;
use log::debug;

use crate::expr::Expr;
use crate::types::{Assignment, Var};

/// Upper bound on the number of variables accepted for enumeration.
///
/// The table has `2^n` rows, so this keeps it at most 16M bits (2 MiB).
pub const MAX_VARIABLES: usize = 24;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TableError {
    /// The formula has more variables than the enumeration limit allows.
    TooManyVariables { count: usize, limit: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyVariables { count, limit } => {
                write!(f, "too many variables for a truth table: {} (limit is {})", count, limit)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// A single truth-table row: an assignment and the formula value under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    /// Formula value for every mask: `2^n` bits.
    bits: BitVec<u64, Lsb0>,
}

impl TruthTable {
    /// Evaluates `expr` under every assignment of `variables`.
    ///
    /// Variables are sorted and deduplicated first; the `i`-th variable in that
    /// order is driven by bit `i` of the row mask, and rows are produced in
    /// ascending mask order, `2^n` of them in total.
    pub fn generate(variables: &[Var], expr: &Expr) -> Result<Self, TableError> {
        Self::generate_with_limit(variables, expr, MAX_VARIABLES)
    }

    pub fn generate_with_limit(variables: &[Var], expr: &Expr, limit: usize) -> Result<Self, TableError> {
        let mut variables = variables.to_vec();
        variables.sort();
        variables.dedup();

        let n = variables.len();
        if n > limit || n >= usize::BITS as usize {
            return Err(TableError::TooManyVariables { count: n, limit });
        }

        let size = 1usize << n;
        debug!("generating truth table over {} variables ({} rows) for {}", n, size, expr);

        let mut bits = BitVec::with_capacity(size);
        let mut assignment = Assignment::from_mask(&variables, 0);
        for mask in 0..size {
            for (i, &var) in variables.iter().enumerate() {
                assignment.set(var, (mask >> i) & 1 == 1);
            }
            bits.push(expr.eval(&assignment));
        }

        Ok(Self { variables, bits })
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Formula value at the given mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask >= 2^n`.
    pub fn result(&self, mask: usize) -> bool {
        self.bits[mask]
    }

    /// Decodes the row at the given mask.
    pub fn row(&self, mask: usize) -> Row {
        Row {
            assignment: Assignment::from_mask(&self.variables, mask as u64),
            result: self.result(mask),
        }
    }

    /// All rows in ascending mask order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.len()).map(move |mask| self.row(mask))
    }

    /// Rows under which the formula holds.
    pub fn satisfying(&self) -> impl Iterator<Item = Row> + '_ {
        self.bits.iter_ones().map(move |mask| self.row(mask))
    }

    pub fn count_satisfying(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_tautology(&self) -> bool {
        self.bits.all()
    }

    pub fn is_contradiction(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| =")?;
        for mask in 0..self.len() {
            for i in 0..self.variables.len() {
                write!(f, "{} ", if (mask >> i) & 1 == 1 { 'T' } else { 'F' })?;
            }
            writeln!(f, "| {}", if self.result(mask) { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}
