//! Incremental tree construction.
//!
//! The scanner discovers operands and operator keywords one at a time and folds them into
//! a [`Builder`]. The builder is the only place where an operator may exist without its
//! right operand; [`Builder::finish`] refuses to turn such a state into a [`Node`].
//!
//! Folding is strictly left to right with no precedence between `and` and `or`:
//!
//! | state              | apply `n`          | keyword `op`        |
//! |--------------------|--------------------|---------------------|
//! | empty              | `n`                | dangling operator   |
//! | complete `t`       | `And(t, n)`        | pending `op` on `t` |
//! | pending `op` on `t`| `op(t, n)`         | dangling operator   |

use std::fmt;

use tracing::trace;

use crate::{ast::Node, error::ParseError};

/// A binary operator spelled out as a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// The `and` keyword.
    And,
    /// The `or` keyword.
    Or,
}

impl Operator {
    /// The keyword spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Combines two operands with this operator.
    pub fn join(self, left: Node, right: Node) -> Node {
        match self {
            Self::And => Node::and(left, right),
            Self::Or => Node::or(left, right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A partially built query tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Builder {
    /// Nothing has been applied yet.
    #[default]
    Empty,
    /// A complete tree that further operands extend by conjunction.
    Complete(Node),
    /// An operator keyword waiting for its right operand.
    Pending {
        /// The operator to apply.
        operator: Operator,
        /// The tree built before the keyword.
        left: Node,
        /// Offset of the keyword in the query, for error reporting.
        position: usize,
    },
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a newly parsed node into the tree.
    ///
    /// An `Empty` node (from an empty group, say) leaves the builder unchanged.
    #[must_use]
    pub fn apply(self, node: Node) -> Self {
        if node.is_empty() {
            return self;
        }
        match self {
            Self::Empty => Self::Complete(node),
            Self::Complete(left) => {
                trace!("implicit conjunction");
                Self::Complete(Node::and(left, node))
            }
            Self::Pending { operator, left, .. } => {
                trace!(%operator, "filling pending operator");
                Self::Complete(operator.join(left, node))
            }
        }
    }

    /// Records an operator keyword found at `position`.
    ///
    /// Fails if there is no left operand yet, or if another operator is still waiting for
    /// its right operand.
    pub fn push_operator(self, operator: Operator, position: usize) -> Result<Self, ParseError> {
        match self {
            Self::Complete(left) => Ok(Self::Pending {
                operator,
                left,
                position,
            }),
            Self::Empty | Self::Pending { .. } => {
                Err(ParseError::DanglingOperator { operator, position })
            }
        }
    }

    /// Converts the builder into a finished tree.
    pub fn finish(self) -> Result<Node, ParseError> {
        match self {
            Self::Empty => Ok(Node::Empty),
            Self::Complete(node) => Ok(node),
            Self::Pending {
                operator, position, ..
            } => Err(ParseError::DanglingOperator { operator, position }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Node {
        Node::value(s)
    }

    #[test]
    fn empty_is_identity() {
        assert_eq!(Builder::new().apply(v("a")).finish(), Ok(v("a")));
        assert_eq!(Builder::new().finish(), Ok(Node::Empty));
    }

    #[test]
    fn applying_empty_is_a_no_op() {
        let builder = Builder::new().apply(v("a"));
        assert_eq!(builder.clone().apply(Node::Empty), builder);
        assert_eq!(Builder::new().apply(Node::Empty), Builder::Empty);
    }

    #[test]
    fn juxtaposition_chains_left() {
        let tree = Builder::new()
            .apply(v("a"))
            .apply(Node::complete_match("b c"))
            .apply(v("d"))
            .finish()
            .unwrap();
        assert_eq!(
            tree,
            Node::and(Node::and(v("a"), Node::complete_match("b c")), v("d"))
        );
    }

    #[test]
    fn pending_operator_takes_next_operand() {
        let tree = Builder::new()
            .apply(v("a"))
            .push_operator(Operator::Or, 2)
            .unwrap()
            .apply(v("b"))
            .push_operator(Operator::And, 7)
            .unwrap()
            .apply(v("c"))
            .finish()
            .unwrap();
        assert_eq!(tree, Node::and(Node::or(v("a"), v("b")), v("c")));
    }

    #[test]
    fn complete_compound_nodes_extend_by_conjunction() {
        let or = Node::or(v("a"), v("b"));
        let key = Node::key("k", v("v"));
        assert_eq!(
            Builder::Complete(or.clone()).apply(v("c")).finish(),
            Ok(Node::and(or, v("c")))
        );
        assert_eq!(
            Builder::Complete(key.clone()).apply(v("c")).finish(),
            Ok(Node::and(key, v("c")))
        );
    }

    #[test]
    fn operator_without_left_operand() {
        assert_eq!(
            Builder::new().push_operator(Operator::And, 0),
            Err(ParseError::DanglingOperator {
                operator: Operator::And,
                position: 0,
            })
        );
    }

    #[test]
    fn consecutive_operators() {
        let builder = Builder::new()
            .apply(v("a"))
            .push_operator(Operator::And, 2)
            .unwrap();
        assert!(matches!(builder, Builder::Pending { .. }));
        assert_eq!(
            builder.push_operator(Operator::Or, 6),
            Err(ParseError::DanglingOperator {
                operator: Operator::Or,
                position: 6,
            })
        );
    }

    #[test]
    fn unfilled_operator_at_finish() {
        let builder = Builder::new()
            .apply(v("a"))
            .push_operator(Operator::Or, 2)
            .unwrap();
        assert_eq!(
            builder.finish(),
            Err(ParseError::DanglingOperator {
                operator: Operator::Or,
                position: 2,
            })
        );
    }
}
