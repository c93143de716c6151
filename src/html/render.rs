//! Node tree → HTML markup via html5ever's serializer

use crate::model::{Node, NodeData};
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use std::io::{self, Write};

impl Serialize for Node {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        if let TraversalScope::ChildrenOnly(_) = traversal_scope {
            return self.serialize_children(serializer);
        }

        match &self.data {
            NodeData::Document => self.serialize_children(serializer),
            NodeData::Doctype {
                name,
                public_id,
                system_id,
            } => serializer.write_doctype(&doctype_body(name, public_id, system_id)),
            NodeData::Element { name, attrs } => {
                serializer.start_elem(
                    name.clone(),
                    attrs.iter().map(|attr| (&attr.name, &*attr.value)),
                )?;
                self.serialize_children(serializer)?;
                serializer.end_elem(name.clone())
            }
            NodeData::Text(text) => serializer.write_text(text),
            NodeData::Comment(text) => serializer.write_comment(text),
            NodeData::ProcessingInstruction { target, contents } => {
                serializer.write_processing_instruction(target, contents)
            }
        }
    }
}

impl Node {
    fn serialize_children<S: Serializer>(&self, serializer: &mut S) -> io::Result<()> {
        for child in &self.children {
            child.serialize(serializer, TraversalScope::IncludeNode)?;
        }
        Ok(())
    }
}

/// Text between `<!DOCTYPE ` and `>`, including any public or system id
fn doctype_body(name: &str, public_id: &str, system_id: &str) -> String {
    let mut body = name.to_owned();
    if !public_id.is_empty() {
        body.push_str(&format!(" PUBLIC \"{public_id}\""));
        if !system_id.is_empty() {
            body.push_str(&format!(" \"{system_id}\""));
        }
    } else if !system_id.is_empty() {
        body.push_str(&format!(" SYSTEM \"{system_id}\""));
    }
    body
}

/// Write `node` as HTML.
///
/// A document renders as its children; any other node renders including
/// itself.
pub fn render<W: Write>(writer: W, node: &Node) -> io::Result<()> {
    let traversal_scope = match node.data {
        NodeData::Document => TraversalScope::ChildrenOnly(None),
        _ => TraversalScope::IncludeNode,
    };
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(writer, node, opts)
}

/// Render `node` into a string
pub fn to_html(node: &Node) -> String {
    let mut buf = Vec::new();
    // writes into a Vec cannot fail
    let _ = render(&mut buf, node);
    String::from_utf8_lossy(&buf).into_owned()
}
