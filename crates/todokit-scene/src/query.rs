//! Test-id lookup over rendered trees.
//!
//! Queries walk the tree depth-first, so "first match" always means
//! document order. `find` insists on exactly one match; tests that expect
//! repeated ids go through `find_all` and index into the result.

use thiserror::Error;

use crate::node::Node;

/// Lookup failures surfaced by the non-panicking query API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no element with test id `{test_id}`")]
    NotFound { test_id: String },
    #[error("test id `{test_id}` matches {count} elements, expected exactly one")]
    Ambiguous { test_id: String, count: usize },
}

impl<H> Node<H> {
    /// The unique element carrying `test_id`.
    pub fn find(&self, test_id: &str) -> Result<&Node<H>, QueryError> {
        let matches = self.find_all(test_id);
        match matches.as_slice() {
            [] => Err(QueryError::NotFound { test_id: test_id.to_owned() }),
            [only] => Ok(only),
            _ => Err(QueryError::Ambiguous {
                test_id: test_id.to_owned(),
                count: matches.len(),
            }),
        }
    }

    /// Every element carrying `test_id`, in document order.
    pub fn find_all(&self, test_id: &str) -> Vec<&Node<H>> {
        let mut matches = Vec::new();
        self.collect_matches(test_id, &mut matches);
        matches
    }

    fn collect_matches<'tree>(&'tree self, test_id: &str, matches: &mut Vec<&'tree Node<H>>) {
        if self.test_id.as_deref() == Some(test_id) {
            matches.push(self);
        }
        for child in &self.children {
            child.collect_matches(test_id, matches);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<()> {
        Node::ul()
            .test_id("list")
            .child(Node::li().test_id("row").child(Node::label().test_id("title")))
            .child(Node::li().test_id("row"))
    }

    #[test]
    fn find_reaches_nested_elements() {
        let tree = sample();
        let title = tree.find("title").unwrap();
        assert_eq!(title.tag, crate::node::Tag::Label);
    }

    #[test]
    fn find_rejects_missing_ids() {
        let tree = sample();
        assert_eq!(
            tree.find("nope").unwrap_err(),
            QueryError::NotFound { test_id: "nope".to_owned() },
        );
    }

    #[test]
    fn find_rejects_repeated_ids() {
        let tree = sample();
        assert_eq!(
            tree.find("row").unwrap_err(),
            QueryError::Ambiguous { test_id: "row".to_owned(), count: 2 },
        );
    }

    #[test]
    fn find_all_returns_document_order() {
        let tree = sample();
        let rows = tree.find_all("row");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].children.len(), 1);
        assert_eq!(rows[1].children.len(), 0);
    }

    #[test]
    fn errors_read_well() {
        let tree = sample();
        let err = tree.find("row").unwrap_err();
        assert_eq!(
            err.to_string(),
            "test id `row` matches 2 elements, expected exactly one",
        );
    }
}
