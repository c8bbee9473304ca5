//! Textual renderings of query trees, built on [`Visitor`].

use crate::{ast::Node, visit::Visitor};

/// Renders a tree back into query syntax.
///
/// Operators are spelled out as `and`/`or`. Folding is left-associative, so only a
/// compound right operand needs parentheses. Field values other than plain terms and
/// phrases are wrapped in a group.
pub struct QueryStringRenderer;

impl QueryStringRenderer {
    /// Renders the right-hand operand of a binary operator.
    fn operand(&mut self, node: &Node) -> String {
        match node {
            Node::And(..) | Node::Or(..) => format!("({})", node.accept(self)),
            _ => node.accept(self),
        }
    }
}

impl Visitor for QueryStringRenderer {
    type Output = String;

    fn visit_empty(&mut self) -> String {
        String::new()
    }

    fn visit_value(&mut self, value: &str) -> String {
        value.to_string()
    }

    fn visit_complete_match(&mut self, value: &str) -> String {
        format!("\"{value}\"")
    }

    fn visit_and(&mut self, left: &Node, right: &Node) -> String {
        format!("{} and {}", left.accept(self), self.operand(right))
    }

    fn visit_or(&mut self, left: &Node, right: &Node) -> String {
        format!("{} or {}", left.accept(self), self.operand(right))
    }

    fn visit_key(&mut self, key: &str, value: &Node) -> String {
        match value {
            Node::Value(_) | Node::CompleteMatch(_) => format!("{key}:{}", value.accept(self)),
            _ => format!("{key}:({})", value.accept(self)),
        }
    }
}

/// Renders a tree on one line, e.g. `Or(Value(a), Key(k: Value(v)))`.
pub struct CompactRenderer;

impl Visitor for CompactRenderer {
    type Output = String;

    fn visit_empty(&mut self) -> String {
        "Empty".to_string()
    }

    fn visit_value(&mut self, value: &str) -> String {
        format!("Value({value})")
    }

    fn visit_complete_match(&mut self, value: &str) -> String {
        format!("CompleteMatch({value})")
    }

    fn visit_and(&mut self, left: &Node, right: &Node) -> String {
        format!("And({}, {})", left.accept(self), right.accept(self))
    }

    fn visit_or(&mut self, left: &Node, right: &Node) -> String {
        format!("Or({}, {})", left.accept(self), right.accept(self))
    }

    fn visit_key(&mut self, key: &str, value: &Node) -> String {
        format!("Key({key}: {})", value.accept(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;

    use super::*;

    fn v(s: &str) -> Node {
        Node::value(s)
    }

    fn cm(s: &str) -> Node {
        Node::complete_match(s)
    }

    #[test]
    fn query_string_forms() {
        assert_eq!(Node::Empty.to_query_string(), "");
        assert_eq!(v("foo").to_query_string(), "foo");
        assert_eq!(cm("foo bar").to_query_string(), "\"foo bar\"");
        assert_eq!(
            Node::and(Node::or(v("a"), v("b")), v("c")).to_query_string(),
            "a or b and c"
        );
        assert_eq!(
            Node::and(v("a"), Node::or(v("b"), v("c"))).to_query_string(),
            "a and (b or c)"
        );
        assert_eq!(
            Node::key("k", Node::or(v("a"), cm("b c"))).to_query_string(),
            "k:(a or \"b c\")"
        );
        assert_eq!(
            Node::key("k", Node::key("j", v("x"))).to_query_string(),
            "k:(j:x)"
        );
    }

    #[test]
    fn compact_forms() {
        let node = Node::and(
            Node::or(v("foo"), Node::key("k", cm("a b"))),
            Node::Empty,
        );
        assert_eq!(
            node.to_compact_string(),
            "And(Or(Value(foo), Key(k: CompleteMatch(a b))), Empty)"
        );
    }

    /// Every tree of depth three or less built from plain words and phrases survives a
    /// render/parse cycle unchanged.
    #[test]
    fn round_trip_shallow_trees() {
        let leaves = vec![v("foo"), cm("foo bar"), Node::key("k", v("bar"))];

        let mut depth_two = leaves.clone();
        for left in &leaves {
            for right in &leaves {
                depth_two.push(Node::and(left.clone(), right.clone()));
                depth_two.push(Node::or(left.clone(), right.clone()));
            }
            depth_two.push(Node::key("field", left.clone()));
        }

        let mut trees = depth_two.clone();
        for left in &depth_two {
            for right in &depth_two {
                trees.push(Node::and(left.clone(), right.clone()));
                trees.push(Node::or(left.clone(), right.clone()));
            }
            trees.push(Node::key("outer", left.clone()));
        }

        for tree in trees {
            let rendered = tree.to_query_string();
            let reparsed = parse(&rendered)
                .unwrap_or_else(|e| panic!("failed to parse {rendered:?}: {e}"));
            assert_eq!(reparsed, tree, "round trip of {rendered:?}");
        }
    }

    #[test]
    fn keyword_terms_are_lossy() {
        let tree = Node::and(v("foo"), v("or"));
        let rendered = tree.to_query_string();
        assert_eq!(rendered, "foo and or");
        assert!(parse(&rendered).is_err());
    }
}
