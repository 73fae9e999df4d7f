//! # dnf-rs: propositional formulas, truth tables and DNF
//!
//! **`dnf-rs`** parses small propositional formulas over single-letter variables,
//! evaluates them, enumerates their truth tables and renders the canonical
//! **disjunctive normal form** (the OR of all satisfying minterms).
//!
//! ## Syntax
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `A`..`Z` | variable |
//! | `!` | negation |
//! | `&` | conjunction |
//! | `\|` | disjunction |
//! | `>` | implication |
//! | `-` | equivalence |
//! | `+` | exclusive or |
//! | `(` `)` | grouping |
//!
//! Whitespace is ignored. Connectives have no precedence and chains group to the
//! right: `A & B | C` means `A & (B | C)`. Negation applies to the operand right
//! after it: `!A & B` means `(!A) & B`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use dnf_rs::expression::Expression;
//!
//! let e = Expression::parse("(A & B) | C").unwrap();
//!
//! let table = e.truth_table().unwrap();
//! assert_eq!(table.len(), 8);
//! assert_eq!(table.count_satisfying(), 5);
//!
//! let dnf = e.to_dnf().unwrap();
//! assert!(dnf.starts_with("A & B & !C || "));
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: the tokenizer and the token cursor.
//! - **[`parser`]**: recursive-descent parser producing an [`Expr`][crate::expr::Expr] tree.
//! - **[`table`]**: truth-table enumeration.
//! - **[`dnf`]**: rendering satisfying rows as a DNF.

pub mod dnf;
pub mod error;
pub mod expr;
pub mod expression;
pub mod parser;
pub mod table;
pub mod token;
pub mod types;

pub use error::Error;
pub use expression::Expression;
