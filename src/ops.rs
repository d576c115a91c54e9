//! [`Node`] operations.

use crate::{
    number::{format_number, parse_number},
    Node,
};

/// The outcome of [`evaluate()`]ing a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<'a> {
    /// The whole tree collapsed down to a single number.
    Value(f64),
    /// Some part of the tree couldn't be computed. Everything that could has
    /// been collapsed into terms.
    Partial(&'a Node),
}

impl<'a> Evaluation<'a> {
    pub fn value(&self) -> Option<f64> {
        match *self {
            Evaluation::Value(value) => Some(value),
            Evaluation::Partial(_) => None,
        }
    }
}

/// Compute as much of the tree as possible, replacing every subtree that
/// could be computed with a term holding its result.
///
/// Subtrees involving symbols (`1 + x`) or assignment (`x = 1`) can't be
/// computed and are left as-is, although any computable parts inside them
/// are still collapsed (`x = 1 + 2` becomes `x = 3`).
///
/// Division by zero isn't an error. It produces an infinity or NaN, just like
/// normal floating point arithmetic.
pub fn evaluate(node: &mut Node) -> Evaluation<'_> {
    collapse(node);

    let value = match &*node {
        Node::Term(text) => parse_number(text),
        Node::Operator { .. } => None,
    };

    let outcome = match value {
        Some(value) => Evaluation::Value(value),
        None => Evaluation::Partial(node),
    };

    log::debug!("Evaluated to {:?}", outcome);

    outcome
}

impl Node {
    /// Evaluate the tree in-place. See [`evaluate()`].
    pub fn evaluate(&mut self) -> Evaluation<'_> { evaluate(self) }
}

/// Collapse a node into a term if both of its (already collapsed) operands
/// are numbers, returning whether the node is now a term.
fn collapse(node: &mut Node) -> bool {
    let result = match node {
        Node::Term(_) => return true,
        Node::Operator { op, left, right } => {
            // both sides are always visited so failures stay local
            let left_done = collapse(left);
            let right_done = collapse(right);

            if !(left_done && right_done) {
                return false;
            }

            let operands = (parse_number(left.text()), parse_number(right.text()));

            match operands {
                (Some(l), Some(r)) => match op.apply(l, r) {
                    Some(value) => value,
                    None => return false,
                },
                _ => return false,
            }
        },
    };

    let text = format_number(result);
    log::trace!("Collapsing \"{}\" into {}", node, text);
    *node = Node::term(text);

    true
}
