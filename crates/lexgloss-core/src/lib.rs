//! Shared types for the lexgloss vocabulary annotation engine.
//!
//! - [`token`] -- word tokens and the segments a fragment is split into
//! - [`gloss`] -- gloss records (translation + pronunciation)
//! - [`enums`] -- per-word classification outcome
//! - [`character`] -- character classes used by the tokenizer

pub mod character;
pub mod enums;
pub mod gloss;
pub mod token;
