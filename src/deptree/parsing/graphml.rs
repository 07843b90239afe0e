//! GraphML parser
//!
//!     Reads the output of `dependency:tree -DoutputType=graphml`. The document is a yEd
//!     flavoured GraphML graph: one `node` element per artifact occurrence, its artifact line
//!     in a nested `y:NodeLabel`, and one `edge` element per dependency:
//!
//!         <node id="0"><data key="d0"><y:ShapeNode>
//!             <y:NodeLabel>com.acme:app:jar:1.0</y:NodeLabel>
//!         </y:ShapeNode></data></node>
//!         <edge source="0" target="1"> ... </edge>
//!
//!     Elements are matched by local name, so the namespace prefix of the label element does
//!     not matter. Attributes are only read from the null namespace.
//!
//! Single Pass
//!
//!     The event stream is consumed once, in order. Maven writes every node before the edges
//!     that reference it, so edges are resolved against the id table as they arrive. Nodes are
//!     kept in an arena while the stream is read; the owned tree is assembled from the root
//!     once the stream ends.

use crate::deptree::building::parse_artifact_line;
use crate::deptree::config::GraphmlOptions;
use crate::deptree::error::{ParseError, ParseResult};
use crate::deptree::node::ArtifactNode;
use crate::deptree::parsing::active_artifact::extract_active_project_artifact;
use crate::deptree::parsing::Parser;
use quick_xml::events::{BytesStart, Event};
use quick_xml::NsReader;
use std::collections::HashMap;
use std::io::BufRead;
use tracing::{debug, trace, warn};

/// Parser for GraphML dependency reports
#[derive(Debug, Clone, Default)]
pub struct GraphmlParser {
    options: GraphmlOptions,
}

impl GraphmlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraphmlOptions {
        &self.options
    }
}

impl Parser for GraphmlParser {
    fn parse<R: BufRead>(&self, reader: R) -> ParseResult<ArtifactNode> {
        let mut reader = NsReader::from_reader(reader);
        let mut handler = EventHandler::new(&self.options);
        let mut buf = Vec::new();
        let mut depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    depth += 1;
                    handler.start_element(&e, true)?;
                }
                Event::Empty(e) => {
                    handler.start_element(&e, false)?;
                    handler.end_element(e.local_name().as_ref())?;
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    handler.end_element(e.local_name().as_ref())?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    handler.characters(&text);
                }
                Event::CData(e) => {
                    let text = reader.decoder().decode(&e).map_err(quick_xml::Error::from)?;
                    handler.characters(&text);
                }
                // quick-xml reports Eof even with elements still open
                Event::Eof if depth > 0 => return Err(ParseError::Truncated { open: depth }),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        handler.finish()
    }
}

/// A registered node and the arena indices of its children, in edge order
struct Entry {
    node: ArtifactNode,
    children: Vec<usize>,
    owned: bool,
}

/// Call-scoped parsing state. The first registered node (index 0) is the root.
struct EventHandler<'o> {
    options: &'o GraphmlOptions,
    entries: Vec<Entry>,
    ids: HashMap<String, usize>,
    current_node_id: Option<String>,
    label: Option<String>,
}

const ROOT: usize = 0;

impl<'o> EventHandler<'o> {
    fn new(options: &'o GraphmlOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            ids: HashMap::new(),
            current_node_id: None,
            label: None,
        }
    }

    fn start_element(&mut self, e: &BytesStart<'_>, has_content: bool) -> ParseResult<()> {
        let name = e.local_name();
        let name = name.as_ref();

        if name == self.options.node_element.as_bytes() {
            self.current_node_id = Some(required_attribute(e, "id")?);
        } else if name == self.options.edge_element.as_bytes() {
            let source = required_attribute(e, "source")?;
            let target = required_attribute(e, "target")?;
            self.link(&source, &target)?;
        } else if has_content && name == self.options.label_element.as_bytes() {
            self.label = Some(String::new());
        }
        Ok(())
    }

    fn end_element(&mut self, name: &[u8]) -> ParseResult<()> {
        if name == self.options.label_element.as_bytes() {
            if let Some(text) = self.label.take() {
                self.register_label(&text)?;
            }
        }
        Ok(())
    }

    fn characters(&mut self, text: &str) {
        if let Some(label) = self.label.as_mut() {
            label.push_str(text);
        }
    }

    fn register_label(&mut self, text: &str) -> ParseResult<()> {
        let text = text.trim();
        let id = self
            .current_node_id
            .take()
            .ok_or(ParseError::DanglingLabel)?;
        trace!(node = %id, label = text, "node label");

        let marker = self.options.active_artifact_marker.as_str();
        let line = if text.contains(marker) {
            match extract_active_project_artifact(text, marker) {
                Some(line) => line,
                None => {
                    warn!(node = %id, "active project artifact label has no coordinate, node skipped");
                    return Ok(());
                }
            }
        } else {
            text
        };

        let node = parse_artifact_line(line)?;
        let index = self.entries.len();
        debug!(node = %id, index, artifact = %node, "registered node");
        if index == ROOT {
            debug!(node = %id, "root node");
        }

        self.entries.push(Entry {
            node,
            children: Vec::new(),
            owned: false,
        });
        self.ids.insert(id, index);
        Ok(())
    }

    fn lookup(&self, id: &str) -> ParseResult<usize> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| ParseError::UnknownNode { id: id.to_string() })
    }

    fn link(&mut self, source: &str, target: &str) -> ParseResult<()> {
        let parent = self.lookup(source)?;
        let child = self.lookup(target)?;
        if child == ROOT || self.entries[child].owned {
            return Err(ParseError::MultipleOwners {
                id: target.to_string(),
            });
        }

        self.entries[child].owned = true;
        self.entries[parent].children.push(child);
        debug!(source, target, "linked edge");
        Ok(())
    }

    fn finish(self) -> ParseResult<ArtifactNode> {
        let mut slots: Vec<Option<Entry>> = self.entries.into_iter().map(Some).collect();
        let root = assemble(&mut slots, ROOT).ok_or(ParseError::NoRoot)?;
        debug!(nodes = root.node_count(), "dependency tree assembled");
        Ok(root)
    }
}

/// Move the arena entry at `index`, and everything it owns, into an owned subtree.
fn assemble(slots: &mut [Option<Entry>], index: usize) -> Option<ArtifactNode> {
    let Entry { mut node, children, .. } = slots.get_mut(index)?.take()?;
    for child in children {
        if let Some(child) = assemble(slots, child) {
            node.add_child(child);
        }
    }
    Some(node)
}

fn required_attribute(e: &BytesStart<'_>, name: &'static str) -> ParseResult<String> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.prefix().is_none() && attr.key.local_name().as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(value.into_owned());
        }
    }
    Err(ParseError::MissingAttribute {
        element: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
        attribute: name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deptree::error::ArtifactError;

    fn graph(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml">
<graph id="dependencies" edgedefault="directed">
{body}
</graph>
</graphml>"#
        )
    }

    fn node(id: &str, label: &str) -> String {
        format!(
            r#"<node id="{id}"><data key="d0"><y:ShapeNode><y:NodeLabel>{label}</y:NodeLabel></y:ShapeNode></data></node>"#
        )
    }

    fn edge(source: &str, target: &str) -> String {
        format!(
            r#"<edge source="{source}" target="{target}"><data key="d1"><y:PolyLineEdge><y:EdgeLabel>compile</y:EdgeLabel></y:PolyLineEdge></data></edge>"#
        )
    }

    fn parse(doc: &str) -> ParseResult<ArtifactNode> {
        GraphmlParser::new().parse_str(doc)
    }

    #[test]
    fn test_children_follow_edge_order() {
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            node("1", "com.acme:core:jar:1.0:compile"),
            node("2", "junit:junit:jar:4.13.2:test"),
            edge("0", "2"),
            edge("0", "1"),
        ]
        .concat());

        let root = parse(&doc).unwrap();
        assert_eq!(root.artifact_id(), "app");
        let children: Vec<&str> = root.children().iter().map(|c| c.artifact_id()).collect();
        assert_eq!(children, vec!["junit", "core"]);
    }

    #[test]
    fn test_grandchildren_linked_after_parent_attached() {
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            node("1", "com.acme:core:jar:1.0:compile"),
            node("2", "org.slf4j:slf4j-api:jar:2.0.9:compile"),
            edge("0", "1"),
            edge("1", "2"),
        ]
        .concat());

        let root = parse(&doc).unwrap();
        let core = root.child(0).unwrap();
        assert_eq!(core.child(0).unwrap().artifact_id(), "slf4j-api");
        assert_eq!(root.node_count(), 3);
    }

    #[test]
    fn test_unknown_edge_target_is_reported() {
        let doc = graph(&[node("0", "com.acme:app:jar:1.0"), edge("0", "7")].concat());
        assert!(matches!(
            parse(&doc),
            Err(ParseError::UnknownNode { id }) if id == "7"
        ));
    }

    #[test]
    fn test_second_owner_is_rejected() {
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            node("1", "com.acme:core:jar:1.0:compile"),
            node("2", "com.acme:util:jar:1.0:compile"),
            edge("0", "1"),
            edge("0", "2"),
            edge("1", "2"),
        ]
        .concat());
        assert!(matches!(
            parse(&doc),
            Err(ParseError::MultipleOwners { id }) if id == "2"
        ));
    }

    #[test]
    fn test_edge_into_root_is_rejected() {
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            node("1", "com.acme:core:jar:1.0:compile"),
            edge("1", "0"),
        ]
        .concat());
        assert!(matches!(parse(&doc), Err(ParseError::MultipleOwners { .. })));
    }

    #[test]
    fn test_empty_graph_has_no_root() {
        assert!(matches!(parse(&graph("")), Err(ParseError::NoRoot)));
    }

    #[test]
    fn test_malformed_label_is_reported_with_line() {
        let doc = graph(&node("0", "com.acme:app"));
        match parse(&doc) {
            Err(ParseError::Artifact(ArtifactError::WrongTokenCount { line, count })) => {
                assert_eq!(line, "com.acme:app");
                assert_eq!(count, 2);
            }
            other => panic!("expected wrong token count, got {other:?}"),
        }
    }

    #[test]
    fn test_unbalanced_markup_is_a_document_error() {
        let doc = "<graphml><graph><node id=\"0\"></graph></graphml>";
        assert!(matches!(parse(doc), Err(ParseError::Document(_))));
    }

    #[test]
    fn test_truncated_document_is_rejected() {
        // Cut off inside the first edge: nodes are complete, nothing is closed
        let doc = [
            "<graphml><graph>".to_string(),
            node("0", "g:a:jar:1.0"),
            node("1", "g:b:jar:1.0:compile"),
            r#"<edge source="0" target="1">"#.to_string(),
        ]
        .concat();
        assert!(matches!(
            parse(&doc),
            Err(ParseError::Truncated { open: 3 })
        ));
    }

    #[test]
    fn test_node_without_id_is_reported() {
        let doc = graph("<node><data/></node>");
        assert!(matches!(
            parse(&doc),
            Err(ParseError::MissingAttribute { attribute: "id", .. })
        ));
    }

    #[test]
    fn test_label_outside_node_is_reported() {
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            "<y:NodeLabel>com.acme:stray:jar:1.0</y:NodeLabel>".to_string(),
        ]
        .concat());
        assert!(matches!(parse(&doc), Err(ParseError::DanglingLabel)));
    }

    #[test]
    fn test_escaped_label_text_is_unescaped() {
        let doc = graph(&node(
            "0",
            "com.acme:app:jar:1.0:compile (version selected from constraint [1.0,2.0&#41;)",
        ));
        let root = parse(&doc).unwrap();
        assert_eq!(
            root.description(),
            Some("version selected from constraint [1.0,2.0)")
        );
    }

    #[test]
    fn test_custom_label_element() {
        let options = GraphmlOptions {
            label_element: "label".to_string(),
            ..GraphmlOptions::default()
        };
        let doc = graph(r#"<node id="a"><label>g:a:jar:1.0</label></node>"#);
        let root = GraphmlParser::with_options(options).parse_str(&doc).unwrap();
        assert_eq!(root.canonical_form(), "g:a:jar:1.0");
    }

    #[test]
    fn test_custom_active_artifact_marker() {
        let options = GraphmlOptions {
            active_artifact_marker: "reactor module".to_string(),
            ..GraphmlOptions::default()
        };
        let doc = graph(&[
            node("0", "com.acme:app:jar:1.0"),
            node(
                "1",
                "reactor module:\n\tartifact = reactor module:\n\tartifact = g:core:jar:1.0:compile;",
            ),
            edge("0", "1"),
        ]
        .concat());
        let root = GraphmlParser::with_options(options).parse_str(&doc).unwrap();
        assert_eq!(root.child(0).unwrap().canonical_form(), "g:core:jar:1.0:compile");
    }
}
