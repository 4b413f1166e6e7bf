//! Owned HTML tree.
//!
//! The parser is lenient about HTML's optional end tags and keeps end tags
//! with no open element verbatim, but is strict about constructs it cannot
//! delimit (unterminated comments, tags, quoted attribute values, unclosed
//! raw-text elements). Parsed elements keep their original
//! start and end tag text, and text nodes keep their raw source text with
//! character references undecoded, so serializing an untouched tree
//! reproduces the input byte for byte.
//!
//! - [`parser`] -- text to [`Document`]
//! - [`serialize`] -- [`Document`] back to text

pub mod parser;
pub mod serialize;

use std::fmt;

pub use parser::{parse_document, parse_fragment};

/// Elements that never have content or an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Error type for markup parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },
    #[error("unterminated declaration starting at byte {offset}")]
    UnterminatedDeclaration { offset: usize },
    #[error("unterminated tag starting at byte {offset}")]
    UnterminatedTag { offset: usize },
    #[error("unterminated attribute value starting at byte {offset}")]
    UnterminatedAttribute { offset: usize },
    #[error("<{name}> starting at byte {offset} is never closed")]
    UnclosedRawText { name: String, offset: usize },
}

/// One attribute of an element. The value is kept as written in the
/// source (character references undecoded); `None` for bare attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// How an element ends in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closing {
    /// Void or self-closing element: no content, no end tag.
    Void,
    /// Explicit end tag; the raw text for parsed elements, `None` for
    /// elements built in code.
    Tag(Option<String>),
    /// End tag omitted in the source (implied by a sibling, a parent's
    /// end tag, or the end of input).
    Omitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub closing: Closing,
    /// Verbatim start tag; cleared whenever the attributes change.
    raw_open: Option<String>,
}

impl Element {
    /// An element with an explicit end tag and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let closing = if is_void_element(&name) {
            Closing::Void
        } else {
            Closing::Tag(None)
        };
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            closing,
            raw_open: None,
        }
    }

    pub(crate) fn parsed(
        name: String,
        attributes: Vec<Attribute>,
        raw_open: String,
        closing: Closing,
    ) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
            closing,
            raw_open: Some(raw_open),
        }
    }

    /// Lowercase tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Raw value of attribute `name` (ASCII case-insensitive). Bare
    /// attributes yield an empty string.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    /// Set attribute `name` to `value`, escaping the value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let escaped = escape_attribute(value);
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(attr) => attr.value = Some(escaped),
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value: Some(escaped),
            }),
        }
        self.raw_open = None;
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Concatenated raw text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub(crate) fn raw_open(&self) -> Option<&str> {
        self.raw_open.as_deref()
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Comment(_) | Node::Declaration(_) | Node::UnmatchedEndTag(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text, character references undecoded.
    Text(String),
    /// Complete comment including `<!--` and `-->`.
    Comment(String),
    /// `<!DOCTYPE ...>`, `<?...>` and other `<!...>` constructs, verbatim.
    Declaration(String),
    /// End tag with no open element to close, verbatim.
    UnmatchedEndTag(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// A parsed document: the top-level node list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        parse_document(input)
    }

    /// Serialize back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        serialize::write_nodes(&mut out, &self.children);
        out
    }

    /// First element in document order satisfying `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.children, &pred)
    }

    /// All elements in document order satisfying `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        find_all_in(&self.children, &pred, &mut found);
        found
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn find_in<'a>(nodes: &'a [Node], pred: &impl Fn(&Element) -> bool) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_in(&el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_all_in<'a>(
    nodes: &'a [Node],
    pred: &impl Fn(&Element) -> bool,
    found: &mut Vec<&'a Element>,
) {
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                found.push(el);
            }
            find_all_in(&el.children, pred, found);
        }
    }
}

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&name)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_attribute_special_chars() {
        assert_eq!(escape_attribute("AT&T"), "AT&amp;T");
        assert_eq!(escape_attribute("<b>"), "&lt;b&gt;");
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attribute("/ˈpeərɪŋ/ 配对"), "/ˈpeərɪŋ/ 配对");
    }

    #[test]
    fn element_builder() {
        let el = Element::new("SPAN")
            .with_attribute("class", "vocab")
            .with_attribute("title", "a \"b\"")
            .with_child(Node::text("word"));
        assert_eq!(el.name(), "span");
        assert_eq!(el.attr("CLASS"), Some("vocab"));
        assert_eq!(el.attr("title"), Some("a &quot;b&quot;"));
        assert!(el.has_class("vocab"));
        assert!(!el.has_class("voc"));
        assert_eq!(el.text_content(), "word");
        assert_eq!(el.closing, Closing::Tag(None));
    }

    #[test]
    fn void_elements_close_as_void() {
        assert_eq!(Element::new("br").closing, Closing::Void);
        assert!(is_void_element("meta"));
        assert!(!is_void_element("p"));
        assert!(is_raw_text_element("style"));
    }

    #[test]
    fn set_attribute_replaces_existing() {
        let mut el = Element::new("p").with_attribute("class", "a");
        el.set_attribute("class", "b c");
        assert_eq!(el.attributes().len(), 1);
        assert!(el.has_class("c"));
    }

    #[test]
    fn find_and_find_all() {
        let doc = Document::new(vec![Node::Element(
            Element::new("div")
                .with_child(Node::Element(Element::new("p").with_child(Node::text("one"))))
                .with_child(Node::Element(Element::new("p").with_child(Node::text("two")))),
        )]);
        assert_eq!(doc.find(|el| el.name() == "p").map(|el| el.text_content()), Some("one".into()));
        assert_eq!(doc.find_all(|el| el.name() == "p").len(), 2);
        assert!(doc.find(|el| el.name() == "style").is_none());
    }
}
