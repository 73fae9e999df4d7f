///! Type-safe wrappers for propositional variables and their assignments.
///!
///! This module provides a newtype for single-letter variables and a map from
///! variables to truth values, so that the rest of the crate never deals with
///! raw `char`s that may fall outside of `A..=Z`.
use std::collections::BTreeMap;
use std::fmt;

/// A propositional variable, named by a single uppercase Latin letter.
///
/// Variables are ordered alphabetically; this ordering is the stable index
/// used for truth-table enumeration and DNF rendering.
///
/// # Invariants
///
/// - The letter is always in `'A'..='Z'`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given letter.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an uppercase ASCII letter.
    pub fn new(name: char) -> Self {
        assert!(name.is_ascii_uppercase(), "Variable names must be in A..=Z, got {:?}", name);
        Var(name)
    }

    /// Creates a new variable, or returns `None` if `name` is not in `A..=Z`.
    pub fn try_new(name: char) -> Option<Self> {
        if name.is_ascii_uppercase() {
            Some(Var(name))
        } else {
            None
        }
    }

    /// Returns the variable letter.
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A mapping from variables to truth values.
///
/// Variables absent from the mapping read as `false`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: BTreeMap<Var, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the assignment encoded by `mask` over `variables`:
    /// bit `i` of the mask is the value of `variables[i]`.
    pub fn from_mask(variables: &[Var], mask: u64) -> Self {
        let values = variables
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, (mask >> i) & 1 == 1))
            .collect();
        Self { values }
    }

    /// Returns the value of `var`, or `false` if it is not assigned.
    pub fn get(&self, var: Var) -> bool {
        self.values.get(&var).copied().unwrap_or(false)
    }

    /// Sets the value of `var`, returning the previous one if any.
    pub fn set(&mut self, var: Var, value: bool) -> Option<bool> {
        self.values.insert(var, value)
    }

    /// Checks whether `var` is explicitly assigned.
    pub fn contains(&self, var: Var) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(variable, value)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().map(|(&v, &b)| (v, b))
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, if value { 'T' } else { 'F' })?;
        }
        write!(f, "}}")
    }
}
