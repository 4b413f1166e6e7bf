// Document walker
//
// Walks the markup tree depth-first in document order and hands each
// eligible text node to the text annotator. Eligible text is the direct
// text content of paragraph-like elements outside translation blocks;
// text inside nested inline markup (code, emphasis, existing markers) is
// left alone. The walker consumes the tree and returns a rebuilt one, so a
// failed pass never leaves a half-annotated tree behind.

pub mod style;

use crate::annotator::{AnnotationState, TextAnnotator};
use crate::markup::{Document, Element, MarkupError, Node, is_raw_text_element, parse_fragment};
use style::{StyleOutcome, apply_marker_style};

/// Walker options.
#[derive(Debug, Clone)]
pub struct WalkerOptions {
    /// Elements whose direct text is annotated.
    pub eligible_elements: Vec<String>,
    /// Element holding the parallel translation; nothing inside it is
    /// annotated.
    pub translation_block: String,
    /// Add a `<style>` element to `<head>` when the document has none.
    pub insert_style_if_missing: bool,
}

impl Default for WalkerOptions {
    fn default() -> Self {
        Self {
            eligible_elements: vec!["p".to_string(), "li".to_string()],
            translation_block: "blockquote".to_string(),
            insert_style_if_missing: false,
        }
    }
}

impl WalkerOptions {
    fn is_eligible(&self, name: &str) -> bool {
        self.eligible_elements.iter().any(|e| e.eq_ignore_ascii_case(name))
    }
}

/// Summary of one document pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    /// Words newly wrapped in a marker during this pass.
    pub marked: usize,
    /// Distinct words (any casing) already marked in the document before
    /// the pass.
    pub already_marked: usize,
    /// What happened to the marker style rule.
    pub style: StyleOutcome,
}

impl WalkReport {
    /// Whether the pass changed the document.
    pub fn changed(&self) -> bool {
        self.marked > 0 || self.style.changed()
    }
}

pub struct DocumentWalker<'a> {
    annotator: TextAnnotator<'a>,
    options: &'a WalkerOptions,
}

impl<'a> DocumentWalker<'a> {
    pub fn new(annotator: TextAnnotator<'a>, options: &'a WalkerOptions) -> Self {
        Self { annotator, options }
    }

    /// Annotate `doc`, threading `state` through every eligible fragment.
    ///
    /// Markers already in the document are recorded in `state` first, so
    /// running the walker over its own output adds nothing.
    pub fn process(
        &self,
        doc: Document,
        state: &mut AnnotationState,
    ) -> Result<(Document, WalkReport), MarkupError> {
        let initial = state.len();
        self.seed_state(&doc, state);
        let seeded = state.len();

        let children = self.walk_nodes(doc.children, false, state)?;
        let (children, style) = apply_marker_style(
            children,
            self.annotator.marker_class(),
            self.options.insert_style_if_missing,
        );

        let report = WalkReport {
            marked: state.len() - seeded,
            already_marked: seeded - initial,
            style,
        };
        log::debug!(
            "document pass: {} new markers, {} existing, style {:?}",
            report.marked,
            report.already_marked,
            report.style
        );
        Ok((Document::new(children), report))
    }

    /// Record the text of every existing marker span.
    fn seed_state(&self, doc: &Document, state: &mut AnnotationState) {
        let class = self.annotator.marker_class();
        let markers = doc.find_all(|el| el.name() == "span" && el.has_class(class));
        state.extend(markers.iter().map(|el| el.text_content()));
    }

    fn walk_nodes(
        &self,
        nodes: Vec<Node>,
        in_translation: bool,
        state: &mut AnnotationState,
    ) -> Result<Vec<Node>, MarkupError> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Element(el) => {
                    out.push(Node::Element(self.walk_element(el, in_translation, state)?));
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }

    fn walk_element(
        &self,
        mut el: Element,
        in_translation: bool,
        state: &mut AnnotationState,
    ) -> Result<Element, MarkupError> {
        if is_raw_text_element(el.name()) {
            return Ok(el);
        }
        let in_translation =
            in_translation || el.name().eq_ignore_ascii_case(&self.options.translation_block);
        let eligible = !in_translation && self.options.is_eligible(el.name());

        let children = std::mem::take(&mut el.children);
        let mut rebuilt = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Node::Text(text) if eligible => {
                    let before = state.len();
                    let rewritten = self.annotator.annotate(&text, state);
                    if state.len() == before {
                        rebuilt.push(Node::Text(text));
                    } else {
                        rebuilt.extend(parse_fragment(&rewritten)?);
                    }
                }
                Node::Element(child) => {
                    rebuilt.push(Node::Element(self.walk_element(child, in_translation, state)?));
                }
                other => rebuilt.push(other),
            }
        }
        el.children = rebuilt;
        Ok(el)
    }
}
