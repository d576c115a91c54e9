use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// A node in an expression tree.
///
/// A freshly parsed tree only ever contains [`Node::Operator`]s with the
/// original operands as [`Node::Term`]s at its leaves. Evaluating a tree
/// collapses every subtree it can compute into a single term holding the
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An atomic operand, either a numeral or some symbol we can't compute.
    Term(SmolStr),
    /// An operator applied to exactly two operands.
    Operator {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn term<S: Into<SmolStr>>(text: S) -> Self { Node::Term(text.into()) }

    pub fn operator(op: Operator, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The text this node holds, the operator's symbol for an
    /// [`Node::Operator`].
    pub fn text(&self) -> &str {
        match self {
            Node::Term(text) => text.as_str(),
            Node::Operator { op, .. } => op.symbol(),
        }
    }

    pub fn is_term(&self) -> bool {
        match self {
            Node::Term(_) => true,
            Node::Operator { .. } => false,
        }
    }

    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Term(_) => None,
            Node::Operator { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// The total number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
            None => 1,
        }
    }

    pub fn depth(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }
}

/// The operators a [`Node`] can split on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`, which can be split on but never computed.
    Assign,
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '=' => Some(Operator::Assign),
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Times),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
        }
    }

    /// How tightly this operator binds. The expression is split on the
    /// operator with the lowest priority.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Assign => 1,
            Operator::Plus | Operator::Minus => 2,
            Operator::Times | Operator::Divide => 3,
        }
    }

    /// Apply the operator, or `None` if it isn't an arithmetic operation.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Operator::Plus => Some(left + right),
            Operator::Minus => Some(left - right),
            Operator::Times => Some(left * right),
            Operator::Divide => Some(left / right),
            Operator::Assign => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_infix(self))
    }
}
