//! # deptree-parser
//!
//! Turns the reports produced by Maven's `dependency:tree` goal into an in-memory tree of
//! artifact nodes, so the tree can be rendered again in other formats.
//!
//! File Layout
//!
//!     src/deptree
//!       ├── lexing     Splits one artifact line into raw field tokens
//!       ├── building   Maps those tokens onto the artifact schema
//!       ├── node       The artifact tree itself
//!       └── parsing    Document parsers (GraphML) that drive the two stages above
//!
//! For testing helpers, see the [testing module](deptree::testing).

pub mod deptree;

pub use deptree::error::{ArtifactError, ParseError};
pub use deptree::node::ArtifactNode;
pub use deptree::parsing::{GraphmlParser, InputType, Parser};
