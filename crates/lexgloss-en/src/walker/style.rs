// Marker style rule: added once to the document's style block

use crate::markup::{Element, Node};

/// CSS for the marker class: dashed underline, help cursor, hover
/// highlight.
pub fn marker_css(class: &str) -> String {
    format!(
        "
        .{class} {{
            border-bottom: 2px dashed #e74c3c;
            cursor: help;
            position: relative;
        }}
        .{class}:hover {{
            background-color: #fff3cd;
        }}
        "
    )
}

/// Whether `css` already has a rule for `.class` (with or without a
/// pseudo-class).
pub fn has_marker_rule(css: &str, class: &str) -> bool {
    let selector = format!(".{class}");
    css.match_indices(&selector).any(|(idx, _)| {
        let after = &css[idx + selector.len()..];
        matches!(after.trim_start().chars().next(), Some('{') | Some(':'))
            && after.starts_with([' ', '\t', '\n', '\r', '{', ':'])
    })
}

/// Outcome of [`apply_marker_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOutcome {
    /// The rule was appended to an existing style element.
    Appended,
    /// A new style element was added to `<head>`.
    Inserted,
    /// The rule was already present.
    AlreadyPresent,
    /// No style element (and no head to insert one into, or insertion
    /// disabled).
    NoStyleBlock,
}

impl StyleOutcome {
    pub fn changed(self) -> bool {
        matches!(self, StyleOutcome::Appended | StyleOutcome::Inserted)
    }
}

/// Make sure the document's first style element carries the marker rule.
///
/// Returns the rebuilt node list; nodes not on the path to the style
/// element are moved through unchanged.
pub fn apply_marker_style(
    nodes: Vec<Node>,
    class: &str,
    insert_if_missing: bool,
) -> (Vec<Node>, StyleOutcome) {
    match first_style_text(&nodes) {
        Some(css) if has_marker_rule(&css, class) => (nodes, StyleOutcome::AlreadyPresent),
        Some(_) => {
            let mut pending = true;
            let nodes = rebuild(
                nodes,
                &mut pending,
                &|el: &Element| el.name() == "style",
                &|el: Element| append_css(el, class),
            );
            (nodes, StyleOutcome::Appended)
        }
        None if insert_if_missing => {
            let mut pending = true;
            let nodes = rebuild(
                nodes,
                &mut pending,
                &|el: &Element| el.name() == "head",
                &|el: Element| insert_style(el, class),
            );
            if pending {
                log::warn!("document has neither <style> nor <head>; marker style not added");
                (nodes, StyleOutcome::NoStyleBlock)
            } else {
                (nodes, StyleOutcome::Inserted)
            }
        }
        None => {
            log::warn!("document has no <style> element; marker style not added");
            (nodes, StyleOutcome::NoStyleBlock)
        }
    }
}

fn first_style_text(nodes: &[Node]) -> Option<String> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name() == "style" {
                return Some(el.text_content());
            }
            if let Some(css) = first_style_text(&el.children) {
                return Some(css);
            }
        }
    }
    None
}

/// Rebuild `nodes`, replacing the first element matching `target` (in
/// document order) with `replace(element)`.
fn rebuild(
    nodes: Vec<Node>,
    pending: &mut bool,
    target: &dyn Fn(&Element) -> bool,
    replace: &dyn Fn(Element) -> Element,
) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Element(el) if *pending && target(&el) => {
                *pending = false;
                Node::Element(replace(el))
            }
            Node::Element(mut el) if *pending => {
                el.children = rebuild(std::mem::take(&mut el.children), pending, target, replace);
                Node::Element(el)
            }
            other => other,
        })
        .collect()
}

fn append_css(mut style: Element, class: &str) -> Element {
    let css = marker_css(class);
    let mut children = std::mem::take(&mut style.children);
    match children.pop() {
        Some(Node::Text(text)) => children.push(Node::Text(text + &css)),
        Some(other) => {
            children.push(other);
            children.push(Node::Text(css));
        }
        None => children.push(Node::Text(css)),
    }
    style.children = children;
    style
}

fn insert_style(mut head: Element, class: &str) -> Element {
    let style = Element::new("style").with_child(Node::Text(marker_css(class)));
    head.children.push(Node::Element(style));
    head.children.push(Node::text("\n"));
    head
}
