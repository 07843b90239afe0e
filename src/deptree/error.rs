//! Error types for artifact lines and dependency documents

use thiserror::Error;

/// Errors raised while turning a single artifact line into an [`ArtifactNode`].
///
/// [`ArtifactNode`]: crate::deptree::node::ArtifactNode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// The line did not split into 4, 5, 6 or 7 tokens
    #[error("Wrong number of tokens: {count} for artifact: {line}")]
    WrongTokenCount { line: String, count: usize },
    /// A required coordinate tokenized to an empty string
    #[error("Empty {field} in artifact: {line}")]
    EmptyField { field: &'static str, line: String },
}

/// Errors that can occur while parsing a dependency document.
///
/// A parse either yields a fully linked tree or one of these; there is no partial result.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The markup itself could not be read (includes I/O failures of the underlying reader)
    #[error("Malformed document: {0}")]
    Document(#[from] quick_xml::Error),

    /// The input ended while elements were still open
    #[error("Document ended with {open} unclosed element(s)")]
    Truncated { open: usize },

    #[error("<{element}> element is missing its '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// An edge names a node id that was never registered
    #[error("Edge references unknown node '{id}'")]
    UnknownNode { id: String },

    /// An edge would give a node a second owner (or make the root a child)
    #[error("Node '{id}' already has an owner")]
    MultipleOwners { id: String },

    #[error("Node label found outside of a node element")]
    DanglingLabel,

    #[error("No root node found in document")]
    NoRoot,
}

/// Type alias for document parsing results
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_token_count_message_carries_line() {
        let err = ArtifactError::WrongTokenCount {
            line: "a:b:c".to_string(),
            count: 3,
        };
        assert_eq!(err.to_string(), "Wrong number of tokens: 3 for artifact: a:b:c");
    }

    #[test]
    fn test_artifact_error_is_wrapped_transparently() {
        let err: ParseError = ArtifactError::EmptyField {
            field: "groupId",
            line: ":a:jar:1.0".to_string(),
        }
        .into();
        assert!(matches!(err, ParseError::Artifact(_)));
        assert_eq!(err.to_string(), "Empty groupId in artifact: :a:jar:1.0");
    }
}
