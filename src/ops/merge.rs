//! Tree merge of a base (template) document with an applied (content) document
//!
//! Immediate children are matched by tag name, one level at a time. A
//! matched pair is merged recursively; everything else is carried over.
//! Applied children that found no partner land at the end of the parent,
//! or where the base has an `htmangl:insert` comment. A `htmangl:copy`
//! comment switches the parent to copy mode instead.

use crate::model::{Directive, Node};
use crate::ordered_map::OrderedMap;
use tracing::{debug, trace};

/// Merge `applied` into `base` and return the combined tree.
///
/// Both inputs are consumed; children are moved into the result rather than
/// copied.
///
/// - If `applied` has no children the result is `base`.
/// - Otherwise, if `base` has no children the result is `applied`.
/// - Otherwise the result keeps `base`'s own kind, name and attributes and
///   its children are assembled as described in the module docs.
///
/// When several applied children share a tag name only the last one takes
/// part in matching; the earlier ones are dropped.
pub fn apply(base: Node, applied: Node) -> Node {
    if applied.children.is_empty() {
        return base;
    }

    if base.children.is_empty() {
        return applied;
    }

    if base
        .children
        .iter()
        .any(|child| child.directive() == Some(Directive::Copy))
    {
        return apply_copy(base, applied);
    }

    let Node {
        data,
        children: base_children,
    } = base;

    let mut to_apply: OrderedMap<String, Node> = applied
        .children
        .into_iter()
        .map(|child| (child.key().to_owned(), child))
        .collect();

    let mut before = Vec::with_capacity(base_children.len());
    let mut after = Vec::new();
    let mut seen_insert = false;

    for child in base_children {
        if child.directive() == Some(Directive::Insert) {
            seen_insert = true;
            continue;
        }

        let matched = if child.is_element() {
            to_apply.remove(child.key())
        } else {
            None
        };

        let placed = match matched {
            Some(partner) => {
                trace!(tag = child.key(), "merging matched element");
                apply(child, partner)
            }
            None => child,
        };

        if seen_insert {
            after.push(placed);
        } else {
            before.push(placed);
        }
    }

    if !to_apply.is_empty() {
        debug!(
            count = to_apply.len(),
            at_insert = seen_insert,
            "placing unmatched applied nodes"
        );
    }

    let mut children = before;
    children.extend(to_apply.into_values());
    children.extend(after);

    Node { data, children }
}

/// Copy mode: every base child except the copy marker is kept without its
/// subtree, then every applied child follows in document order.
fn apply_copy(base: Node, applied: Node) -> Node {
    debug!(
        base = base.children.len(),
        applied = applied.children.len(),
        "copy directive"
    );

    let mut result = base.clone_shallow();
    result.children = base
        .children
        .iter()
        .filter(|child| child.directive() != Some(Directive::Copy))
        .map(Node::clone_shallow)
        .chain(applied.children)
        .collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, children: Vec<Node>) -> Node {
        Node::element(tag).with_children(children)
    }

    fn text(s: &str) -> Node {
        Node::text(s)
    }

    #[test]
    fn test_empty_applied_returns_base() {
        let base = el("body", vec![el("h1", vec![text("Hey")])]);
        let merged = apply(base.clone(), Node::element("body"));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_empty_base_returns_applied() {
        let applied = el("body", vec![el("h1", vec![text("Bye")])]).with_attr("class", "x");
        let merged = apply(Node::element("body"), applied.clone());
        assert_eq!(merged, applied);
    }

    #[test]
    fn test_matched_elements_concatenate_children() {
        let base = el("body", vec![el("h1", vec![text("Hello")])]);
        let applied = el("body", vec![el("h1", vec![text("Bye")])]);

        let merged = apply(base, applied);

        assert_eq!(merged.children.len(), 1);
        let h1 = &merged.children[0];
        assert_eq!(h1.children, vec![text("Hello"), text("Bye")]);
    }

    #[test]
    fn test_result_keeps_base_attributes() {
        let base = Node::element("html")
            .with_attr("lang", "en")
            .with_child(Node::element("body"));
        let applied = Node::element("html")
            .with_attr("lang", "fr")
            .with_child(Node::element("p"));

        let merged = apply(base, applied);

        assert_eq!(merged.attr("lang"), Some("en"));
        let tags: Vec<_> = merged.children.iter().filter_map(Node::tag).collect();
        assert_eq!(tags, vec!["body", "p"]);
    }

    #[test]
    fn test_unmatched_applied_appended_at_end() {
        let base = el("body", vec![el("h1", vec![text("Hello")]), text("tail")]);
        let applied = el("body", vec![el("p", vec![text("Bye")])]);

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![el("h1", vec![text("Hello")]), text("tail"), el("p", vec![text("Bye")])]
        );
    }

    #[test]
    fn test_insert_directive_places_applied_content() {
        let base = el(
            "body",
            vec![
                el("header", vec![text("H")]),
                Node::comment(" htmangl:insert "),
                el("footer", vec![text("F")]),
            ],
        );
        let applied = el("body", vec![el("p", vec![text("C")])]);

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![
                el("header", vec![text("H")]),
                el("p", vec![text("C")]),
                el("footer", vec![text("F")]),
            ]
        );
    }

    #[test]
    fn test_matched_element_after_insert_stays_after() {
        let base = el(
            "body",
            vec![
                Node::comment("htmangl:insert"),
                el("footer", vec![text("F")]),
            ],
        );
        let applied = el(
            "body",
            vec![el("footer", vec![text("!")]), el("main", vec![])],
        );

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![el("main", vec![]), el("footer", vec![text("F"), text("!")])]
        );
    }

    #[test]
    fn test_copy_directive_keeps_base_shallow_and_appends_all() {
        let base = el(
            "head",
            vec![
                Node::element("link").with_attr("rel", "a"),
                el("title", vec![text("Site")]),
                Node::comment("htmangl:copy"),
                el("style", vec![text("body{}")]),
            ],
        );
        let applied = el(
            "head",
            vec![
                Node::element("link").with_attr("rel", "c"),
                el("title", vec![text("Page")]),
                Node::element("link").with_attr("rel", "d"),
            ],
        );

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![
                Node::element("link").with_attr("rel", "a"),
                Node::element("title"),
                Node::element("style"),
                Node::element("link").with_attr("rel", "c"),
                el("title", vec![text("Page")]),
                Node::element("link").with_attr("rel", "d"),
            ]
        );
    }

    #[test]
    fn test_copy_mode_emits_applied_subtrees_intact() {
        let base = el(
            "head",
            vec![Node::element("title"), Node::comment("htmangl:copy")],
        );
        let applied = el("head", vec![el("title", vec![text("Page")])]);

        let merged = apply(base, applied);

        // the matched title is not merged first, so its text survives
        assert_eq!(
            merged.children,
            vec![Node::element("title"), el("title", vec![text("Page")])]
        );
    }

    #[test]
    fn test_copy_mode_keeps_insert_comment() {
        let base = el(
            "div",
            vec![Node::comment("htmangl:insert"), Node::comment("htmangl:copy")],
        );
        let applied = el("div", vec![text("x")]);

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![Node::comment("htmangl:insert"), text("x")]
        );
    }

    #[test]
    fn test_duplicate_applied_tags_keep_last() {
        let base = el("ul", vec![el("li", vec![text("base")])]);
        let applied = el(
            "ul",
            vec![el("li", vec![text("first")]), el("li", vec![text("second")])],
        );

        let merged = apply(base, applied);

        assert_eq!(merged.children, vec![el("li", vec![text("base"), text("second")])]);
    }

    #[test]
    fn test_duplicate_base_tags_each_processed() {
        let base = el(
            "div",
            vec![el("p", vec![text("one")]), el("p", vec![text("two")])],
        );
        let applied = el("div", vec![el("p", vec![text("+")])]);

        let merged = apply(base, applied);

        assert_eq!(
            merged.children,
            vec![
                el("p", vec![text("one"), text("+")]),
                el("p", vec![text("two")]),
            ]
        );
    }

    #[test]
    fn test_text_nodes_never_match() {
        let base = el("p", vec![text("same")]);
        let applied = el("p", vec![text("same")]);

        let merged = apply(base, applied);

        assert_eq!(merged.children, vec![text("same"), text("same")]);
    }

    #[test]
    fn test_directives_apply_at_every_level() {
        let base = el(
            "body",
            vec![el(
                "main",
                vec![
                    el("nav", vec![]),
                    Node::comment("htmangl:insert"),
                    el("aside", vec![]),
                ],
            )],
        );
        let applied = el("body", vec![el("main", vec![el("article", vec![])])]);

        let merged = apply(base, applied);

        let main = &merged.children[0];
        let tags: Vec<_> = main.children.iter().filter_map(Node::tag).collect();
        assert_eq!(tags, vec!["nav", "article", "aside"]);
    }

    #[test]
    fn test_merging_twice_with_empty_is_stable() {
        let base = el("body", vec![el("h1", vec![text("Hey")])]);
        let once = apply(base.clone(), Node::element("body"));
        let twice = apply(once.clone(), Node::element("body"));
        assert_eq!(once, twice);
        assert_eq!(twice, base);
    }
}
