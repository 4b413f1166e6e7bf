// Word token and segment types produced by the tokenizer

/// A word found in a text fragment.
///
/// Offsets are byte offsets into the fragment that was scanned, so
/// `&fragment[token.start..token.end] == token.text` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordToken<'a> {
    /// The word exactly as written (original casing).
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl<'a> WordToken<'a> {
    /// Create a token for `text` starting at byte offset `start`.
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.len(),
        }
    }

    /// Length of the word in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Lowercase key used for vocabulary, gloss, and dedup lookups.
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }

    /// Whether the word is made of digits only.
    pub fn is_numeric(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_digit())
    }
}

/// One step of tokenization: the verbatim text preceding a word, and the
/// word itself. The last segment of a fragment usually carries trailing
/// text with no word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text between the previous word (or fragment start) and this word.
    pub before: &'a str,
    /// The word, or `None` for the trailing segment.
    pub word: Option<WordToken<'a>>,
}

impl<'a> Segment<'a> {
    /// A segment with no word, carrying only verbatim text.
    pub fn tail(before: &'a str) -> Self {
        Self { before, word: None }
    }

    /// Total length in bytes covered by this segment.
    pub fn len(&self) -> usize {
        self.before.len() + self.word.map_or(0, |w| w.text.len())
    }

    /// Whether the segment covers no text at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
