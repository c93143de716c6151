//! Owned HTML node tree

use super::Directive;
use html5ever::{Attribute, LocalName, Namespace, QualName};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// What a node is, plus the data that belongs to that kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// The document root
    Document,
    /// `<!DOCTYPE name public_id system_id>`
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    /// An element with its qualified name and attributes in source order
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
    },
    /// Character data
    Text(String),
    /// `<!-- ... -->` body, untrimmed
    Comment(String),
    /// `<?target contents>`, only produced by foreign content
    ProcessingInstruction { target: String, contents: String },
}

/// A node in an HTML tree
///
/// Every node owns its children, so a node always has exactly one parent.
/// Children are kept in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node
    pub fn new(data: NodeData) -> Self {
        Node {
            data,
            children: Vec::new(),
        }
    }

    /// Create an empty document root
    pub fn document() -> Self {
        Node::new(NodeData::Document)
    }

    /// Create an HTML-namespace element
    pub fn element(tag: &str) -> Self {
        Node::new(NodeData::Element {
            name: QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
            attrs: Vec::new(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::new(NodeData::Text(text.into()))
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::new(NodeData::Comment(text.into()))
    }

    /// Create a `<!DOCTYPE name>` node with empty public and system ids
    pub fn doctype(name: impl Into<String>) -> Self {
        Node::new(NodeData::Doctype {
            name: name.into(),
            public_id: String::new(),
            system_id: String::new(),
        })
    }

    /// Append an attribute (no-op for non-elements)
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let NodeData::Element { attrs, .. } = &mut self.data {
            attrs.push(Attribute {
                name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
                value: value.into(),
            });
        }
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    /// Local tag name, for elements only
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    /// Attributes in source order; empty for non-elements
    pub fn attrs(&self) -> &[Attribute] {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs.as_slice(),
            _ => &[],
        }
    }

    /// Look up an attribute value by local name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| &*attr.value)
    }

    /// The string siblings are matched on.
    ///
    /// Elements are keyed by local tag name, character data and comments
    /// by their raw text, doctypes by name and the document by "".
    pub fn key(&self) -> &str {
        match &self.data {
            NodeData::Document => "",
            NodeData::Doctype { name, .. } => name.as_str(),
            NodeData::Element { name, .. } => &*name.local,
            NodeData::Text(text) | NodeData::Comment(text) => text.as_str(),
            NodeData::ProcessingInstruction { target, .. } => target.as_str(),
        }
    }

    /// The directive this node carries, if it is a directive comment
    pub fn directive(&self) -> Option<Directive> {
        match &self.data {
            NodeData::Comment(text) => Directive::parse(text),
            _ => None,
        }
    }

    /// Copy kind, name and attributes, leaving the children behind.
    pub fn clone_shallow(&self) -> Self {
        Node::new(self.data.clone())
    }

    /// Move the whole subtree into a fresh node.
    ///
    /// The returned node carries a copy of this node's data and every one of
    /// its children; `self` is left with no children. For callers holding a
    /// node by reference; [`ops::apply`](crate::ops::apply) owns its inputs
    /// and moves subtrees by value instead.
    pub fn take_tree(&mut self) -> Self {
        Node {
            data: self.data.clone(),
            children: std::mem::take(&mut self.children),
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeData::Text(text) = &self.data {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First descendant element (depth-first, including `self`) with `tag`
    pub fn find(&self, tag: &str) -> Option<&Node> {
        if self.tag() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }
}
