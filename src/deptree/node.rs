//! Artifact tree
//!
//! An [`ArtifactNode`] is one artifact coordinate in a dependency tree. Nodes own their
//! children outright: the tree has a single root and every other node exactly one owner.
//! Coordinates never change after construction, only the child list grows, and its order
//! is the order in which the report listed the dependencies.

use crate::deptree::building::ArtifactFields;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactNode {
    group_id: String,
    artifact_id: String,
    packaging: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    omitted: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ArtifactNode>,
}

impl ArtifactNode {
    /// Create a node from the four mandatory coordinates.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        packaging: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            packaging: packaging.into(),
            classifier: None,
            version: version.into(),
            scope: None,
            description: None,
            omitted: false,
            children: Vec::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn omitted(mut self) -> Self {
        self.omitted = true;
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when the report listed this dependency as evaluated but left out
    pub fn is_omitted(&self) -> bool {
        self.omitted
    }

    /// Append a child, keeping insertion order.
    pub fn add_child(&mut self, child: ArtifactNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[ArtifactNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&ArtifactNode> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `groupId:artifactId:packaging[:classifier]:version[:scope]`
    pub fn canonical_form(&self) -> String {
        let mut parts = vec![
            self.group_id.as_str(),
            self.artifact_id.as_str(),
            self.packaging.as_str(),
        ];
        parts.extend(self.classifier.as_deref());
        parts.push(&self.version);
        parts.extend(self.scope.as_deref());
        parts.join(":")
    }

    /// Pre-order walk over this node and everything below it, with depths relative to it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![(0, self)],
        }
    }

    /// Number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

impl From<ArtifactFields> for ArtifactNode {
    fn from(fields: ArtifactFields) -> Self {
        Self {
            group_id: fields.group_id,
            artifact_id: fields.artifact_id,
            packaging: fields.packaging,
            classifier: fields.classifier,
            version: fields.version,
            scope: fields.scope,
            description: fields.description,
            omitted: fields.omitted,
            children: Vec::new(),
        }
    }
}

impl fmt::Display for ArtifactNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.omitted {
            write!(f, "(")?;
        }
        write!(f, "{}", self.canonical_form())?;
        if let Some(description) = &self.description {
            if self.omitted {
                write!(f, " - {}", description)?;
            } else {
                write!(f, " ({})", description)?;
            }
        }
        if self.omitted {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Iterator returned by [`ArtifactNode::descendants`]
pub struct Descendants<'a> {
    stack: Vec<(usize, &'a ArtifactNode)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (usize, &'a ArtifactNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ArtifactNode {
        let mut root = ArtifactNode::new("com.acme", "app", "jar", "1.0");
        let mut core = ArtifactNode::new("com.acme", "core", "jar", "1.0").with_scope("compile");
        core.add_child(ArtifactNode::new("org.slf4j", "slf4j-api", "jar", "2.0.9").with_scope("compile"));
        root.add_child(core);
        root.add_child(ArtifactNode::new("junit", "junit", "jar", "4.13.2").with_scope("test"));
        root
    }

    #[test]
    fn test_canonical_form_skips_missing_optionals() {
        let node = ArtifactNode::new("g", "a", "jar", "1.0");
        assert_eq!(node.canonical_form(), "g:a:jar:1.0");

        let node = node.with_classifier("tests").with_scope("test");
        assert_eq!(node.canonical_form(), "g:a:jar:tests:1.0:test");
    }

    #[test]
    fn test_display_matches_report_notation() {
        let managed = ArtifactNode::new("g", "a", "jar", "1.0")
            .with_scope("compile")
            .with_description("version managed from 0.9");
        assert_eq!(
            managed.to_string(),
            "g:a:jar:1.0:compile (version managed from 0.9)"
        );

        let omitted = ArtifactNode::new("g", "a", "jar", "1.0")
            .with_scope("compile")
            .with_description("omitted for duplicate")
            .omitted();
        assert_eq!(
            omitted.to_string(),
            "(g:a:jar:1.0:compile - omitted for duplicate)"
        );
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let root = sample_tree();
        let ids: Vec<&str> = root.children().iter().map(|c| c.artifact_id()).collect();
        assert_eq!(ids, vec!["core", "junit"]);
        assert!(root.child(2).is_none());
    }

    #[test]
    fn test_descendants_are_pre_order_with_depth() {
        let root = sample_tree();
        let walk: Vec<(usize, &str)> = root
            .descendants()
            .map(|(depth, node)| (depth, node.artifact_id()))
            .collect();
        assert_eq!(
            walk,
            vec![(0, "app"), (1, "core"), (2, "slf4j-api"), (1, "junit")]
        );
        assert_eq!(root.node_count(), 4);
    }
}
