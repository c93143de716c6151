//! html5ever → owned node tree

use crate::model::{Node, NodeData};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData as DomData, RcDom};
use std::io::{self, Read};
use tracing::debug;

/// Parse a complete document from a string
pub fn parse_str(html: &str) -> Node {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    finish(dom)
}

/// Parse a complete document from a byte stream.
///
/// Input is decoded as UTF-8, replacing invalid sequences. Only I/O
/// failures are reported; markup errors are recovered.
pub fn parse_reader<R: Read>(reader: &mut R) -> io::Result<Node> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(reader)?;
    Ok(finish(dom))
}

fn finish(dom: RcDom) -> Node {
    if !dom.errors.is_empty() {
        debug!(count = dom.errors.len(), "recovered from markup errors");
    }
    convert(&dom.document)
}

fn convert(handle: &Handle) -> Node {
    let data = match &handle.data {
        DomData::Document => NodeData::Document,
        DomData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        },
        DomData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
        DomData::Comment { contents } => NodeData::Comment(contents.to_string()),
        DomData::Element { name, attrs, .. } => NodeData::Element {
            name: name.clone(),
            attrs: attrs.borrow().clone(),
        },
        DomData::ProcessingInstruction { target, contents } => NodeData::ProcessingInstruction {
            target: target.to_string(),
            contents: contents.to_string(),
        },
    };

    let mut children: Vec<Node> = handle.children.borrow().iter().map(convert).collect();

    // <template> content lives in a separate fragment
    if let DomData::Element {
        template_contents, ..
    } = &handle.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            children.extend(contents.children.borrow().iter().map(convert));
        }
    }

    Node { data, children }
}
