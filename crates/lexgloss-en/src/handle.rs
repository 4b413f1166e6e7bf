// Annotator: top-level integration point.
//
// Owns the known vocabulary, the gloss table and the options, and runs the
// whole pipeline (parse, walk, serialize) for one document at a time. The
// handle is immutable while annotating; every document gets a fresh
// AnnotationState, so one handle can serve many documents, also from
// several threads.

use std::fs;
use std::path::{Path, PathBuf};

use lexgloss_core::enums::Classification;

use crate::annotator::{AnnotationState, AnnotatorOptions, TextAnnotator};
use crate::gloss::GlossLookup;
use crate::markup::{Document, MarkupError};
use crate::vocabulary::KnownVocabulary;
use crate::walker::{DocumentWalker, WalkReport, WalkerOptions};
use crate::DataError;

/// Error type for document annotation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed markup: {0}")]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of annotating a document in memory.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub html: String,
    pub report: WalkReport,
}

/// Top-level handle owning the vocabulary tables and options.
#[derive(Debug, Clone)]
pub struct Annotator {
    vocabulary: KnownVocabulary,
    glosses: GlossLookup,
    annotator_options: AnnotatorOptions,
    walker_options: WalkerOptions,
}

impl Annotator {
    pub fn new(
        vocabulary: KnownVocabulary,
        glosses: GlossLookup,
        annotator_options: AnnotatorOptions,
    ) -> Self {
        Self {
            vocabulary,
            glosses,
            annotator_options,
            walker_options: WalkerOptions::default(),
        }
    }

    /// Handle over the baseline vocabulary and gloss dictionary embedded in
    /// the crate.
    #[cfg(feature = "builtin")]
    pub fn builtin() -> Result<Self, DataError> {
        Ok(Self::new(
            KnownVocabulary::builtin(),
            GlossLookup::builtin()?,
            AnnotatorOptions::default(),
        ))
    }

    // -- Options --

    /// Set the CSS class of the marker span.
    pub fn set_marker_class(&mut self, class: impl Into<String>) {
        self.annotator_options.marker_class = class.into();
    }

    /// Set whether a style element is added to `<head>` when the document
    /// has none.
    pub fn set_insert_style(&mut self, value: bool) {
        self.walker_options.insert_style_if_missing = value;
    }

    /// Replace the document walker options.
    pub fn set_walker_options(&mut self, options: WalkerOptions) {
        self.walker_options = options;
    }

    pub fn vocabulary(&self) -> &KnownVocabulary {
        &self.vocabulary
    }

    pub fn glosses(&self) -> &GlossLookup {
        &self.glosses
    }

    pub fn walker_options(&self) -> &WalkerOptions {
        &self.walker_options
    }

    /// Fragment annotator borrowing this handle's tables.
    pub fn text_annotator(&self) -> TextAnnotator<'_> {
        TextAnnotator::new(&self.vocabulary, &self.glosses)
            .with_marker_class(&self.annotator_options.marker_class)
    }

    /// Classify a single word as if it were the first occurrence in a
    /// document.
    pub fn classify(&self, word: &str) -> Classification {
        self.text_annotator()
            .classify(word, &AnnotationState::new())
    }

    /// Annotate a plain text fragment with a fresh state.
    pub fn annotate_text(&self, fragment: &str) -> String {
        self.text_annotator()
            .annotate(fragment, &mut AnnotationState::new())
    }

    /// Annotate an already parsed document with a fresh state.
    pub fn annotate_document(&self, doc: Document) -> Result<(Document, WalkReport), MarkupError> {
        let walker = DocumentWalker::new(self.text_annotator(), &self.walker_options);
        walker.process(doc, &mut AnnotationState::new())
    }

    /// Parse, annotate and serialize an HTML document.
    pub fn annotate_html(&self, html: &str) -> Result<Annotated, Error> {
        let doc = Document::parse(html)?;
        let (doc, report) = self.annotate_document(doc)?;
        Ok(Annotated {
            html: doc.to_html(),
            report,
        })
    }

    /// Annotate the document at `path` and write the result back to the
    /// same path.
    ///
    /// The file is rewritten only after the whole document was annotated,
    /// and only if the pass changed something.
    pub fn annotate_file(&self, path: impl AsRef<Path>) -> Result<WalkReport, Error> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let html = fs::read_to_string(path).map_err(io_err)?;
        let annotated = self.annotate_html(&html)?;
        if annotated.report.changed() {
            fs::write(path, annotated.html).map_err(io_err)?;
            log::info!(
                "{}: {} words annotated",
                path.display(),
                annotated.report.marked
            );
        } else {
            log::info!("{}: unchanged", path.display());
        }
        Ok(annotated.report)
    }
}
