// Per-document record of words already annotated

use hashbrown::HashSet;

/// Lowercase forms of the words already wrapped in a marker during the
/// current document pass.
///
/// Create one per document and thread it through every fragment of that
/// document; it only ever grows.
#[derive(Debug, Clone, Default)]
pub struct AnnotationState {
    marked: HashSet<String>,
}

impl AnnotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `word` (any casing) has already been marked.
    pub fn contains(&self, word: &str) -> bool {
        self.marked.contains(word.to_lowercase().as_str())
    }

    /// Record `word` as marked. Returns `false` if it already was.
    pub fn insert(&mut self, word: &str) -> bool {
        self.marked.insert(word.to_lowercase())
    }

    /// Number of distinct words marked so far.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Marked words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.marked.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for AnnotationState {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
