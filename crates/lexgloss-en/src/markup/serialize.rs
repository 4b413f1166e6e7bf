// Tree to HTML text

use super::{Closing, Element, Node};

/// Append the HTML for `nodes` to `out`.
pub fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

pub fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text)
        | Node::Comment(text)
        | Node::Declaration(text)
        | Node::UnmatchedEndTag(text) => out.push_str(text),
    }
}

fn write_element(out: &mut String, el: &Element) {
    match el.raw_open() {
        Some(raw) => out.push_str(raw),
        None => write_open_tag(out, el),
    }
    if el.closing == Closing::Void {
        return;
    }
    write_nodes(out, &el.children);
    match &el.closing {
        Closing::Tag(Some(raw)) => out.push_str(raw),
        Closing::Tag(None) => {
            out.push_str("</");
            out.push_str(el.name());
            out.push('>');
        }
        Closing::Omitted | Closing::Void => {}
    }
}

fn write_open_tag(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.name());
    for attr in el.attributes() {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
    out.push('>');
}
