//! Split infix expressions into binary trees.
//!
//! An expression like `1+2*3` is [`parse()`]d into a tree of [`Node`]s, which
//! can then be rendered in polish ([`render_prefix()`]), infix
//! ([`render_infix()`]) or reverse polish ([`render_postfix()`]) notation, and
//! [`evaluate()`]d.
//!
//! ```rust
//! use polish::{Evaluation, Node};
//!
//! let mut tree: Node = "1+2*3".parse()?;
//! assert_eq!(polish::render_prefix(&tree), "+ 1 * 2 3");
//! assert_eq!(polish::render_postfix(&tree), "1 2 3 * +");
//! assert_eq!(tree.evaluate(), Evaluation::Value(7.0));
//! # Ok::<(), polish::ParseError>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod expr;
pub mod number;
mod ops;
mod parse;
pub mod render;

pub use expr::{Node, Operator};
pub use ops::{evaluate, Evaluation};
pub use parse::{
    locate_operator, parse, strip_outermost_brackets, validate_bracket_balance,
    ParseError, Parser, DEFAULT_MAX_NODES,
};
pub use render::{render_infix, render_postfix, render_prefix, Visitor};
