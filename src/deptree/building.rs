//! Building
//!
//!     Second stage of artifact line parsing. The tokenizer only knows how many tokens a line
//!     has and whether free text was seen; this stage maps those tokens onto the artifact
//!     schema and produces an [`ArtifactNode`](crate::deptree::node::ArtifactNode).
//!
//!     [`parse_artifact_line`] runs both stages and is what document parsers call per label.

pub mod field_mapper;

pub use field_mapper::{map_tokens, ArtifactFields};

use crate::deptree::error::ArtifactError;
use crate::deptree::lexing::tokenize;
use crate::deptree::node::ArtifactNode;

/// Parse one artifact line into a childless node.
pub fn parse_artifact_line(line: &str) -> Result<ArtifactNode, ArtifactError> {
    let tokens = tokenize(line);
    let fields = map_tokens(line, tokens)?;
    Ok(ArtifactNode::from(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_scope() {
        let node = parse_artifact_line("com.acme:foo:jar:1.0:compile").unwrap();
        assert_eq!(node.group_id(), "com.acme");
        assert_eq!(node.artifact_id(), "foo");
        assert_eq!(node.packaging(), "jar");
        assert_eq!(node.version(), "1.0");
        assert_eq!(node.scope(), Some("compile"));
        assert_eq!(node.classifier(), None);
        assert_eq!(node.description(), None);
        assert!(!node.is_omitted());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_parse_line_rejects_short_line() {
        let err = parse_artifact_line("com.acme:foo:1.0").unwrap_err();
        assert_eq!(
            err,
            ArtifactError::WrongTokenCount {
                line: "com.acme:foo:1.0".to_string(),
                count: 3,
            }
        );
    }
}
