//! Walking a [`Node`] tree and writing it out in the various notations.

use crate::Node;

/// Callbacks fired while [`Node::walk()`]ing a tree.
///
/// Each node is visited three times: when we first [`Visitor::arrive()`],
/// after its left subtree is done ([`Visitor::transit()`]), and when we
/// [`Visitor::depart()`] after the right subtree. Terms fire all three hooks
/// back-to-back.
pub trait Visitor {
    fn arrive(&mut self, _node: &Node) {}

    fn transit(&mut self, _node: &Node) {}

    fn depart(&mut self, _node: &Node) {}
}

impl Node {
    /// Walk the tree depth-first, left subtree before right.
    pub fn walk<V: Visitor>(&self, visitor: &mut V) {
        visitor.arrive(self);

        if let Node::Operator { left, .. } = self {
            left.walk(visitor);
        }

        visitor.transit(self);

        if let Node::Operator { right, .. } = self {
            right.walk(visitor);
        }

        visitor.depart(self);
    }
}

/// Render the tree in polish notation (`+ 1 2`).
pub fn render_prefix(node: &Node) -> String {
    let mut words = Words::default();
    node.walk(&mut Prefix(&mut words));
    words.into_string()
}

/// Render the tree in reverse polish notation (`1 2 +`).
pub fn render_postfix(node: &Node) -> String {
    let mut words = Words::default();
    node.walk(&mut Postfix(&mut words));
    words.into_string()
}

/// Render the tree in infix notation (`1 + (2 * 3)`).
///
/// Every operator except the one at the root is bracketed, so the output
/// never depends on operator priorities to be read back correctly.
pub fn render_infix(node: &Node) -> String {
    let mut infix = Infix::default();
    node.walk(&mut infix);
    infix.buffer
}

/// Space separated words.
#[derive(Debug, Default)]
struct Words {
    buffer: String,
}

impl Words {
    fn push(&mut self, word: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(word);
    }

    fn into_string(self) -> String { self.buffer }
}

struct Prefix<'a>(&'a mut Words);

impl<'a> Visitor for Prefix<'a> {
    fn arrive(&mut self, node: &Node) { self.0.push(node.text()); }
}

struct Postfix<'a>(&'a mut Words);

impl<'a> Visitor for Postfix<'a> {
    fn depart(&mut self, node: &Node) { self.0.push(node.text()); }
}

#[derive(Debug, Default)]
struct Infix {
    buffer: String,
    depth: usize,
}

impl Visitor for Infix {
    fn arrive(&mut self, node: &Node) {
        if !node.is_term() && self.depth > 0 {
            self.buffer.push('(');
        }
        self.depth += 1;
    }

    fn transit(&mut self, node: &Node) {
        match node {
            Node::Operator { op, .. } => {
                self.buffer.push(' ');
                self.buffer.push_str(op.symbol());
                self.buffer.push(' ');
            },
            Node::Term(text) => self.buffer.push_str(text),
        }
    }

    fn depart(&mut self, node: &Node) {
        self.depth -= 1;
        if !node.is_term() && self.depth > 0 {
            self.buffer.push(')');
        }
    }
}
