//! The located-occurrence value handed from engines to the processor.

use std::ops::Range;

/// A sensitive term found in a text, together with where it was found.
///
/// `start` and `end` are UTF-8 byte offsets into the text the engine was
/// given: `start` is inclusive and `end` exclusive. `word` is the matched
/// substring as the engine reports it, so it may differ from
/// `&text[start..end]` if the engine normalized the input. The processor
/// never relies on `word.len() == end - start`.
///
/// Values are immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    word: String,
    start: usize,
    end: usize,
}

impl MatchResult {
    /// Creates a match for `word` spanning `start..end`.
    #[must_use]
    pub fn new(word: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    /// The matched term.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Inclusive start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The span as a range, suitable for slicing the scanned text.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Width of the span in bytes. Zero for inverted spans.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the match and returns the owned word.
    pub fn into_word(self) -> String {
        self.word
    }
}
