//! Testing helpers
//!
//!     Tree tests should not walk `children()` by hand: that gets verbose quickly and breaks
//!     whenever the node type changes shape. [`assert_tree`] gives a fluent API instead, where
//!     each assertion names what it checks and failures report the path to the failing node.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use deptree_parser::deptree::testing::assert_tree;
//!
//!     assert_tree(&root)
//!         .coordinates("com.acme:app:jar:1.0")
//!         .child_count(2)
//!         .child(0, |core| {
//!             core.artifact_id("core").scope(Some("compile")).leaf();
//!         })
//!         .child(1, |junit| {
//!             junit.scope(Some("test")).omitted(false);
//!         });
//!     ```

use crate::deptree::building::parse_artifact_line;
use crate::deptree::node::ArtifactNode;

/// Create an assertion builder for a tree root
pub fn assert_tree(node: &ArtifactNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

/// Build a childless node from an artifact line, panicking on malformed input.
pub fn mk_node(line: &str) -> ArtifactNode {
    parse_artifact_line(line).unwrap_or_else(|e| panic!("invalid test artifact line: {e}"))
}

pub struct NodeAssertion<'a> {
    node: &'a ArtifactNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// The node under test, for checks the fluent API does not cover
    pub fn node(&self) -> &'a ArtifactNode {
        self.node
    }

    /// Assert the `group:artifact:packaging[:classifier]:version[:scope]` form
    pub fn coordinates(self, expected: &str) -> Self {
        let actual = self.node.canonical_form();
        assert_eq!(
            actual, expected,
            "{}: Expected coordinates '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn group_id(self, expected: &str) -> Self {
        assert_eq!(
            self.node.group_id(),
            expected,
            "{}: Expected groupId '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn artifact_id(self, expected: &str) -> Self {
        assert_eq!(
            self.node.artifact_id(),
            expected,
            "{}: Expected artifactId '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn version(self, expected: &str) -> Self {
        assert_eq!(
            self.node.version(),
            expected,
            "{}: Expected version '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn classifier(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.node.classifier(),
            expected,
            "{}: Unexpected classifier",
            self.context
        );
        self
    }

    pub fn scope(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.node.scope(),
            expected,
            "{}: Unexpected scope",
            self.context
        );
        self
    }

    pub fn description(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.node.description(),
            expected,
            "{}: Unexpected description",
            self.context
        );
        self
    }

    pub fn omitted(self, expected: bool) -> Self {
        assert_eq!(
            self.node.is_omitted(),
            expected,
            "{}: Expected omitted = {}",
            self.context,
            expected
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} under {}",
            self.context,
            expected,
            actual,
            self.node
        );
        self
    }

    pub fn leaf(self) -> Self {
        self.child_count(0)
    }

    /// Run assertions against the child at `index`
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.node.children().len()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:child[{}]", self.context, index),
        });
        self
    }

    /// Assert the artifactIds of the direct children, in order
    pub fn child_artifact_ids(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .children()
            .iter()
            .map(|child| child.artifact_id())
            .collect();
        assert_eq!(actual, expected, "{}: Unexpected children", self.context);
        self
    }
}
