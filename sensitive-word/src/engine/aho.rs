use std::fmt;

use aho_corasick::{AhoCorasick, MatchKind};

use super::MatchEngine;
use crate::{
    context::ScanContext,
    error::{BoxError, Result},
    result::MatchResult,
};

/// Matches the whole denylist in one pass with an Aho-Corasick automaton.
///
/// Uses leftmost-longest semantics: matches never overlap, are reported in
/// increasing start order, and at any position the longest denylisted word
/// wins. `locate_first` stops at the first match.
#[derive(Clone)]
pub struct AhoCorasickEngine {
    automaton: AhoCorasick,
    words: Vec<String>,
}

impl AhoCorasickEngine {
    /// Builds the automaton. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&words)?;
        tracing::debug!(
            word_count = words.len(),
            heap_bytes = automaton.memory_usage(),
            "aho-corasick engine built"
        );
        Ok(Self { automaton, words })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn to_match(&self, found: aho_corasick::Match) -> MatchResult {
        let word = &self.words[found.pattern().as_usize()];
        MatchResult::new(word.as_str(), found.start(), found.end())
    }
}

impl fmt::Debug for AhoCorasickEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AhoCorasickEngine")
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl MatchEngine for AhoCorasickEngine {
    fn locate(&self, text: &str, _context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        Ok(self
            .automaton
            .find_iter(text)
            .map(|found| self.to_match(found))
            .collect())
    }

    fn locate_first(
        &self,
        text: &str,
        _context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        Ok(self.automaton.find(text).map(|found| self.to_match(found)))
    }
}
