use crate::{Node, Operator};
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The number of nodes a [`Parser`] will create before giving up.
pub const DEFAULT_MAX_NODES: usize = 80;

/// Parse a [`Node`] tree from some text.
pub fn parse(s: &str) -> Result<Node, ParseError> { Parser::new(s).parse() }

/// Splits an infix expression into a binary tree.
///
/// There is no tokenizer or grammar. Each (sub-)expression is stripped of
/// redundant outer brackets, then split in two at its loosest binding
/// operator that isn't inside brackets. Of several operators with the same
/// priority the rightmost one is chosen, which makes chains like `1-2-3`
/// associate to the left.
///
/// The text is expected to have already been stripped of whitespace.
///
/// Every split creates two nodes, and parsing fails with
/// [`ParseError::ExpressionTooLong`] once more than `max_nodes` would be
/// needed. Because the recursion goes one level deeper per split this also
/// bounds the stack depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Parser<'a> {
    src: &'a str,
    max_nodes: usize,
    nodes_used: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Parser {
            src,
            max_nodes: DEFAULT_MAX_NODES,
            nodes_used: 0,
        }
    }

    /// Override the maximum number of nodes the tree may contain.
    pub fn with_max_nodes(self, max_nodes: usize) -> Self {
        Parser { max_nodes, ..self }
    }

    pub fn parse(mut self) -> Result<Node, ParseError> {
        validate_bracket_balance(self.src)?;

        self.allocate(1)?;
        let root = self.node(self.src)?;

        log::debug!(
            "Parsed \"{}\" into a tree of {} nodes",
            self.src,
            self.nodes_used
        );

        Ok(root)
    }

    fn allocate(&mut self, count: usize) -> Result<(), ParseError> {
        if self.nodes_used + count > self.max_nodes {
            return Err(ParseError::ExpressionTooLong {
                max_nodes: self.max_nodes,
            });
        }

        self.nodes_used += count;
        Ok(())
    }

    fn node(&mut self, text: &str) -> Result<Node, ParseError> {
        let text = strip_outermost_brackets(text)?;

        let (index, op) = match locate_operator(text) {
            Some(found) => found,
            None if text.is_empty() => {
                return Err(ParseError::InvalidExpression {
                    expression: SmolStr::new(""),
                })
            },
            None => return Ok(Node::term(text)),
        };

        // an operator needs something on either side of it
        if index == 0 || index == text.len() - 1 {
            return Err(ParseError::InvalidExpression {
                expression: text.into(),
            });
        }

        self.allocate(2)?;

        let (left, right) = (&text[..index], &text[index + 1..]);
        log::trace!("Splitting \"{}\" into \"{}\" {} \"{}\"", text, left, op, right);

        let left = self.node(left)?;
        let right = self.node(right)?;

        Ok(Node::operator(op, left, right))
    }
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse(s) }
}

/// Make sure every opening bracket in the expression has a matching closing
/// bracket.
pub fn validate_bracket_balance(expression: &str) -> Result<(), ParseError> {
    let mut depth: isize = 0;

    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;

                if depth < 0 {
                    // e.g. "(1+2))"
                    break;
                }
            },
            _ => {},
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::UnbalancedBracket {
            expression: expression.into(),
        })
    }
}

/// Remove any brackets which wrap the entire expression, so `((1+2))` becomes
/// `1+2`.
///
/// An expression like `(1+2)+(3+4)` starts and ends with a bracket without
/// being wrapped by them, and is returned unchanged.
pub fn strip_outermost_brackets(expression: &str) -> Result<&str, ParseError> {
    let mut expression = expression;

    while is_wrapped(expression) {
        let inner = &expression[1..expression.len() - 1];

        if inner.is_empty() {
            return Err(ParseError::EmptyBracket {
                expression: expression.into(),
            });
        }

        expression = inner;
    }

    Ok(expression)
}

/// Is the opening bracket at the start of this expression closed by its last
/// character?
fn is_wrapped(expression: &str) -> bool {
    if !expression.starts_with('(') {
        return false;
    }

    let mut depth = 0;

    for (i, c) in expression.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;

                if depth == 0 {
                    return i == expression.len() - 1;
                }
            },
            _ => {},
        }
    }

    false
}

/// Find the operator an expression should be split on, returning its byte
/// index.
///
/// This is the operator outside of any brackets with the lowest
/// [`Operator::priority()`], preferring the rightmost when there is a tie.
pub fn locate_operator(expression: &str) -> Option<(usize, Operator)> {
    let mut best: Option<(usize, Operator)> = None;
    let mut depth = 0;

    for (i, c) in expression.char_indices() {
        let op = match c {
            '(' => {
                depth += 1;
                continue;
            },
            ')' => {
                depth -= 1;
                continue;
            },
            other => match Operator::from_char(other) {
                Some(op) => op,
                None => continue,
            },
        };

        if depth != 0 {
            continue;
        }

        match best {
            Some((_, current)) if op.priority() > current.priority() => {},
            _ => best = Some((i, op)),
        }
    }

    best
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The opening and closing brackets don't match up.
    UnbalancedBracket { expression: SmolStr },
    /// A pair of brackets with nothing inside them.
    EmptyBracket { expression: SmolStr },
    /// An operator was missing one of its operands.
    InvalidExpression { expression: SmolStr },
    /// The tree would need more than `max_nodes` nodes.
    ExpressionTooLong { max_nodes: usize },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedBracket { expression } => {
                write!(f, "unbalanced bracket: {}", expression)
            },
            ParseError::EmptyBracket { expression } => {
                write!(f, "empty bracket: {}", expression)
            },
            ParseError::InvalidExpression { expression } => {
                write!(f, "invalid expression: {}", expression)
            },
            ParseError::ExpressionTooLong { max_nodes } => write!(
                f,
                "expression too long (more than {} nodes)",
                max_nodes
            ),
        }
    }
}

impl Error for ParseError {}


#[cfg(test)]
mod locator_tests {
    use super::*;

    macro_rules! locate_test {
        ($name:ident, $src:expr, None) => {
            #[test]
            fn $name() {
                assert_eq!(locate_operator($src), None);
            }
        };
        ($name:ident, $src:expr, $index:expr, $op:expr) => {
            #[test]
            fn $name() {
                assert_eq!(locate_operator($src), Some(($index, $op)));
            }
        };
    }

    locate_test!(single_term, "1", None);
    locate_test!(symbol, "abc", None);
    locate_test!(only_nested_operators, "(1+2)", None);
    locate_test!(plus, "1+2", 1, Operator::Plus);
    locate_test!(rightmost_of_equal_priority, "1+2-3", 3, Operator::Minus);
    locate_test!(lowest_priority_wins, "1+2*3", 1, Operator::Plus);
    locate_test!(lowest_priority_on_the_right, "1*2+3", 3, Operator::Plus);
    locate_test!(assignment_is_loosest, "x=1+2", 1, Operator::Assign);
    locate_test!(rightmost_assignment, "x=1=2", 3, Operator::Assign);
    locate_test!(ignores_bracketed, "(1+2)*3", 5, Operator::Times);
    locate_test!(between_brackets, "(1+2)+(3+4)", 5, Operator::Plus);
    locate_test!(leading_operator, "+1", 0, Operator::Plus);
    locate_test!(trailing_operator, "1/", 1, Operator::Divide);
}
