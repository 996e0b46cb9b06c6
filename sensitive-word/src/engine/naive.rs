use std::fmt;

use super::MatchEngine;
use crate::{context::ScanContext, error::BoxError, result::MatchResult};

/// Searches the text once per denylisted word.
///
/// `locate` reports every non-overlapping occurrence of each word, grouped by
/// word in denylist order and then by position. Results are therefore not
/// sorted by start offset when the denylist has more than one word, and
/// occurrences of different words may overlap.
///
/// Cost is `O(words * text)`. Prefer [`super::AhoCorasickEngine`] for large
/// denylists.
#[derive(Clone, Default)]
pub struct NaiveScanEngine {
    words: Vec<String>,
}

impl NaiveScanEngine {
    /// Builds an engine from denylisted words. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();
        tracing::debug!(word_count = words.len(), "naive scan engine built");
        Self { words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

// Denylist contents stay out of Debug output.
impl fmt::Debug for NaiveScanEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveScanEngine")
            .field("word_count", &self.words.len())
            .finish()
    }
}

impl MatchEngine for NaiveScanEngine {
    fn locate(&self, text: &str, _context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        Ok(self
            .words
            .iter()
            .flat_map(|word| {
                text.match_indices(word.as_str())
                    .map(|(start, found)| MatchResult::new(found, start, start + found.len()))
            })
            .collect())
    }

    /// Earliest occurrence of any word; the longer word wins a tie.
    fn locate_first(
        &self,
        text: &str,
        _context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        let earliest = self
            .words
            .iter()
            .filter_map(|word| text.find(word.as_str()).map(|start| (start, word)))
            .min_by(|(a_start, a_word), (b_start, b_word)| {
                a_start
                    .cmp(b_start)
                    .then_with(|| b_word.len().cmp(&a_word.len()))
            });
        Ok(earliest.map(|(start, word)| MatchResult::new(word.as_str(), start, start + word.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::NaiveScanEngine;
    use crate::{MatchEngine, MatchResult, ScanContext};

    #[test]
    fn locate_groups_by_word_then_position() {
        let engine = NaiveScanEngine::new(["cd", "ab"]);
        let found = engine.locate("abcdab", &ScanContext::default()).unwrap();
        assert_eq!(
            found,
            vec![
                MatchResult::new("cd", 2, 4),
                MatchResult::new("ab", 0, 2),
                MatchResult::new("ab", 4, 6),
            ]
        );
    }

    #[test]
    fn locate_reports_overlapping_words() {
        let engine = NaiveScanEngine::new(["abc", "bcd"]);
        let found = engine.locate("abcd", &ScanContext::default()).unwrap();
        assert_eq!(
            found,
            vec![MatchResult::new("abc", 0, 3), MatchResult::new("bcd", 1, 4)]
        );
    }

    #[test]
    fn empty_words_are_ignored() {
        let engine = NaiveScanEngine::new(["", "bad"]);
        assert_eq!(engine.word_count(), 1);
        let found = engine.locate("bad", &ScanContext::default()).unwrap();
        assert_eq!(found, vec![MatchResult::new("bad", 0, 3)]);
    }

    #[test]
    fn locate_first_prefers_earliest_then_longest() {
        let engine = NaiveScanEngine::new(["word", "bad", "bad word"]);
        let first = engine
            .locate_first("a bad word", &ScanContext::default())
            .unwrap();
        assert_eq!(first, Some(MatchResult::new("bad word", 2, 10)));
    }

    #[test]
    fn multibyte_offsets_are_byte_offsets() {
        let engine = NaiveScanEngine::new(["敏感"]);
        let found = engine.locate("有敏感词", &ScanContext::default()).unwrap();
        assert_eq!(found, vec![MatchResult::new("敏感", 3, 9)]);
    }

    #[test]
    fn debug_hides_words() {
        let engine = NaiveScanEngine::new(["secret"]);
        let debug = format!("{engine:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("word_count: 1"));
    }
}
