//! Traversal of finished query trees.
//!
//! Consumers implement [`Visitor`] with one handler per node kind and hand it to
//! [`Node::accept`], which forwards to the matching handler. Handlers recurse by calling
//! `accept` on the children they care about.

use crate::ast::Node;

/// One handler per node kind.
pub trait Visitor {
    /// The value produced for each visited node.
    type Output;

    /// Handles [`Node::Empty`].
    fn visit_empty(&mut self) -> Self::Output;

    /// Handles [`Node::Value`].
    fn visit_value(&mut self, value: &str) -> Self::Output;

    /// Handles [`Node::CompleteMatch`].
    fn visit_complete_match(&mut self, value: &str) -> Self::Output;

    /// Handles [`Node::And`].
    fn visit_and(&mut self, left: &Node, right: &Node) -> Self::Output;

    /// Handles [`Node::Or`].
    fn visit_or(&mut self, left: &Node, right: &Node) -> Self::Output;

    /// Handles [`Node::Key`].
    fn visit_key(&mut self, key: &str, value: &Node) -> Self::Output;
}

/// A search term found in a query, with the fields it is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Enclosing field names, outermost first. Empty for unscoped terms.
    pub fields: Vec<String>,
    /// The term text.
    pub text: String,
    /// True if the term came from a quoted phrase.
    pub exact: bool,
}

/// Collects every term of a query in left-to-right order.
pub fn collect_terms(node: &Node) -> Vec<Term> {
    let mut collector = TermCollector::default();
    node.accept(&mut collector);
    collector.terms
}

/// Visitor behind [`collect_terms`].
#[derive(Default)]
struct TermCollector {
    /// Field names of the keys currently being visited.
    fields: Vec<String>,
    /// Terms collected so far.
    terms: Vec<Term>,
}

impl TermCollector {
    /// Records a term under the current field scope.
    fn push(&mut self, text: &str, exact: bool) {
        self.terms.push(Term {
            fields: self.fields.clone(),
            text: text.to_string(),
            exact,
        });
    }
}

impl Visitor for TermCollector {
    type Output = ();

    fn visit_empty(&mut self) {}

    fn visit_value(&mut self, value: &str) {
        self.push(value, false);
    }

    fn visit_complete_match(&mut self, value: &str) {
        self.push(value, true);
    }

    fn visit_and(&mut self, left: &Node, right: &Node) {
        left.accept(self);
        right.accept(self);
    }

    fn visit_or(&mut self, left: &Node, right: &Node) {
        left.accept(self);
        right.accept(self);
    }

    fn visit_key(&mut self, key: &str, value: &Node) {
        self.fields.push(key.to_string());
        value.accept(self);
        self.fields.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts nodes per kind, in the order empty/value/phrase/and/or/key.
    #[derive(Default)]
    struct KindCounter([usize; 6]);

    impl Visitor for KindCounter {
        type Output = ();

        fn visit_empty(&mut self) {
            self.0[0] += 1;
        }

        fn visit_value(&mut self, _value: &str) {
            self.0[1] += 1;
        }

        fn visit_complete_match(&mut self, _value: &str) {
            self.0[2] += 1;
        }

        fn visit_and(&mut self, left: &Node, right: &Node) {
            self.0[3] += 1;
            left.accept(self);
            right.accept(self);
        }

        fn visit_or(&mut self, left: &Node, right: &Node) {
            self.0[4] += 1;
            left.accept(self);
            right.accept(self);
        }

        fn visit_key(&mut self, _key: &str, value: &Node) {
            self.0[5] += 1;
            value.accept(self);
        }
    }

    #[test]
    fn dispatch_reaches_every_kind() {
        let node = Node::or(
            Node::and(Node::value("a"), Node::complete_match("b c")),
            Node::key("k", Node::and(Node::value("d"), Node::value("e"))),
        );
        let mut counter = KindCounter::default();
        node.accept(&mut counter);
        assert_eq!(counter.0, [0, 3, 1, 2, 1, 1]);

        let mut counter = KindCounter::default();
        Node::Empty.accept(&mut counter);
        assert_eq!(counter.0, [1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn terms_carry_field_scope() {
        let node = Node::and(
            Node::value("rust"),
            Node::key(
                "title",
                Node::or(
                    Node::complete_match("getting started"),
                    Node::key("lang", Node::value("en")),
                ),
            ),
        );

        assert_eq!(
            collect_terms(&node),
            vec![
                Term {
                    fields: vec![],
                    text: "rust".into(),
                    exact: false,
                },
                Term {
                    fields: vec!["title".into()],
                    text: "getting started".into(),
                    exact: true,
                },
                Term {
                    fields: vec!["title".into(), "lang".into()],
                    text: "en".into(),
                    exact: false,
                },
            ]
        );
    }

    #[test]
    fn empty_has_no_terms() {
        assert!(collect_terms(&Node::Empty).is_empty());
    }
}
