//! English vocabulary-difficulty annotation for HTML documents.
//!
//! Words outside a fixed baseline vocabulary are wrapped in a marker span
//! carrying their gloss as a tooltip, once per document. Inflected forms of
//! known words are recognised through a closed table of suffix rules.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- baseline word set and suffix rules
//! - [`gloss`] -- word to gloss lookup with a placeholder fallback
//! - [`tokenizer`] -- splits text fragments into word and non-word segments
//! - [`annotator`] -- rewrites one text fragment
//! - [`markup`] -- lossless HTML tree, parser and serializer
//! - [`walker`] -- selects the text of a document that gets annotated
//! - [`handle`] -- [`Annotator`], the top-level entry point

pub mod annotator;
pub mod gloss;
pub mod handle;
pub mod markup;
pub mod tokenizer;
pub mod vocabulary;
pub mod walker;

pub use annotator::{AnnotationState, AnnotatorOptions, TextAnnotator};
pub use gloss::GlossLookup;
pub use handle::{Annotated, Annotator, Error};
pub use markup::{Document, MarkupError};
pub use vocabulary::KnownVocabulary;
pub use walker::{DocumentWalker, WalkReport, WalkerOptions};

/// Error type for loading the vocabulary and gloss tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("invalid baseline entry on line {line}: {entry:?}")]
    InvalidBaselineEntry { line: usize, entry: String },
    #[error("malformed gloss dictionary: {0}")]
    GlossJson(#[from] serde_json::Error),
}
