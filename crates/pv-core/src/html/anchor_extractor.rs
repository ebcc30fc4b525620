use crate::html::fragment_parser::FragmentParser;
use crate::html::node::{Element, Node};

use log::debug;

/// The single link a fragment consists of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoleLink {
    /// Decoded `href` attribute
    pub href: String,
    /// All text inside the anchor with wrapper markup stripped, including
    /// text inside invisible wrappers
    pub text: String,
    /// The part of `text` a sighted reader actually sees
    pub visible_text: String,
}

/// Extract the link from a fragment that is exactly one `<a href>` element.
///
/// Renderers shorten long links by wrapping the scheme and the tail in
/// elements carrying `invisible_class`; those wrappers are unwrapped into
/// `text` but left out of `visible_text`. Returns `None` when the fragment
/// does not parse, has anything besides the anchor at its top level, lacks an
/// `href`, or shows no visible text.
pub fn extract_sole_link(html: &str, invisible_class: &str) -> Option<SoleLink> {
    let nodes = match FragmentParser::parse(html) {
        Ok(nodes) => nodes,
        Err(e) => {
            debug!("Fragment rejected: {e}");
            return None;
        }
    };

    let [node] = nodes.as_slice() else {
        debug!(
            "Fragment rejected: expected a lone anchor, found {} top-level nodes",
            nodes.len()
        );
        return None;
    };

    let Some(anchor) = node.as_element() else {
        debug!("Fragment rejected: top-level node is not an element");
        return None;
    };

    if anchor.name != "a" {
        debug!("Fragment rejected: top-level element is <{}>", anchor.name);
        return None;
    }

    let Some(href) = anchor.attribute("href") else {
        debug!("Fragment rejected: anchor has no href");
        return None;
    };

    let text = node.text_content();
    let mut visible_text = String::new();
    collect_visible_text(anchor, invisible_class, &mut visible_text);

    if visible_text.trim().is_empty() {
        debug!("Fragment rejected: anchor has no visible text");
        return None;
    }

    Some(SoleLink {
        href: href.to_string(),
        text,
        visible_text,
    })
}

fn collect_visible_text(element: &Element, invisible_class: &str, visible_text: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(content) => visible_text.push_str(content),
            Node::Element(inner) if !inner.has_class(invisible_class) => {
                collect_visible_text(inner, invisible_class, visible_text);
            }
            Node::Element(_) | Node::Comment(_) => {}
        }
    }
}
