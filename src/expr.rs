use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Assignment, Var};

/// Binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    And,
    Or,
    Implies,
    Equiv,
    Xor,
}

impl Op {
    pub const ALL: [Op; 5] = [Op::And, Op::Or, Op::Implies, Op::Equiv, Op::Xor];

    /// Maps an input symbol to its connective.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '&' => Some(Op::And),
            '|' => Some(Op::Or),
            '>' => Some(Op::Implies),
            '-' => Some(Op::Equiv),
            '+' => Some(Op::Xor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::And => '&',
            Op::Or => '|',
            Op::Implies => '>',
            Op::Equiv => '-',
            Op::Xor => '+',
        }
    }

    /// Applies the connective to already evaluated operands.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        let equiv = (lhs && rhs) || (!lhs && !rhs);
        match self {
            Op::And => lhs && rhs,
            Op::Or => lhs || rhs,
            Op::Implies => !lhs || rhs,
            Op::Equiv => equiv,
            Op::Xor => !equiv,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Propositional formula tree.
///
/// Every node owns its children; leaves are always variables.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    Binary(Box<Expr>, Op, Box<Expr>),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(Var::new(name))
    }

    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn binary(lhs: Self, op: Op, rhs: Self) -> Self {
        Expr::Binary(Box::new(lhs), op, Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(lhs, Op::And, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(lhs, Op::Or, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(lhs, Op::Implies, rhs)
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Self::binary(lhs, Op::Equiv, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Self::binary(lhs, Op::Xor, rhs)
    }
}

impl Expr {
    /// Evaluates the formula under `assignment`.
    ///
    /// Unassigned variables read as `false`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Var(v) => assignment.get(*v),
            Expr::Not(inner) => !inner.eval(assignment),
            Expr::Binary(lhs, op, rhs) => op.apply(lhs.eval(assignment), rhs.eval(assignment)),
        }
    }

    /// Collects all variables occurring in the formula.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(inner) => inner.collect_variables(vars),
            Expr::Binary(lhs, _, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
        }
    }

    /// Height of the tree; a single variable has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(inner) => 1 + inner.depth(),
            Expr::Binary(lhs, _, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(inner) => 1 + inner.size(),
            Expr::Binary(lhs, _, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(..) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

// Only the outermost chain is left bare. Nested binaries are always bracketed,
// so the output parses back to the same tree regardless of associativity.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f)
            }
            Expr::Binary(lhs, op, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, " {} ", op)?;
                rhs.fmt_operand(f)
            }
        }
    }
}
