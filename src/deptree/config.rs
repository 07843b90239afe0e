//! Parser configuration
//!
//! Element names and marker phrases the GraphML parser looks for. The defaults match what
//! `dependency:tree -DoutputType=graphml` writes; they can be overridden, or deserialized
//! from whatever format the caller keeps its settings in.

use serde::{Deserialize, Serialize};

/// Marker phrase of a label that stands for a module of the reactor build
pub const ACTIVE_PROJECT_ARTIFACT: &str = "active project artifact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphmlOptions {
    /// Local name of the node element (carries an `id` attribute)
    pub node_element: String,
    /// Local name of the edge element (carries `source` and `target` attributes)
    pub edge_element: String,
    /// Local name of the element holding a node's artifact line
    pub label_element: String,
    /// Labels containing this phrase are resolved as active project artifacts
    pub active_artifact_marker: String,
}

impl Default for GraphmlOptions {
    fn default() -> Self {
        Self {
            node_element: "node".to_string(),
            edge_element: "edge".to_string(),
            label_element: "NodeLabel".to_string(),
            active_artifact_marker: ACTIVE_PROJECT_ARTIFACT.to_string(),
        }
    }
}
