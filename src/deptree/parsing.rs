//! Parsing
//!
//!     Document parsers read a whole dependency report and hand every artifact line they find
//!     to [`parse_artifact_line`](crate::deptree::building::parse_artifact_line), wiring the
//!     resulting nodes into a tree.
//!
//!     Every parser implements [`Parser`]. [`InputType`] names the report formats this crate
//!     understands and dispatches to the matching parser.
//!
//! Parsing State
//!
//!     Any id tables or pending state a parser needs live inside a single `parse` call and are
//!     dropped with it. Parser values only hold configuration, so one parser can be reused for
//!     any number of documents.

pub mod active_artifact;
pub mod graphml;

pub use active_artifact::extract_active_project_artifact;
pub use graphml::GraphmlParser;

use crate::deptree::error::ParseResult;
use crate::deptree::node::ArtifactNode;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

/// A parser for one dependency report format
pub trait Parser {
    /// Parse a complete report and return the root of its dependency tree.
    fn parse<R: BufRead>(&self, reader: R) -> ParseResult<ArtifactNode>;

    fn parse_str(&self, source: &str) -> ParseResult<ArtifactNode> {
        self.parse(source.as_bytes())
    }
}

/// Report formats understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    /// `dependency:tree -DoutputType=graphml`
    Graphml,
}

impl InputType {
    /// Parse `reader` with the default parser for this format.
    pub fn parse<R: BufRead>(self, reader: R) -> ParseResult<ArtifactNode> {
        match self {
            InputType::Graphml => GraphmlParser::default().parse(reader),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputType::Graphml => "graphml",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown input type '{0}'")]
pub struct UnknownInputType(pub String);

impl FromStr for InputType {
    type Err = UnknownInputType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graphml" => Ok(InputType::Graphml),
            _ => Err(UnknownInputType(s.to_string())),
        }
    }
}
