//! The orchestration core: queries and the splice pass.
//!
//! Every operation follows the same sequence: guard the empty text, ask the
//! engine for raw matches, then either report them or splice replacement
//! tokens into the text. The engine is held by composition, so swapping the
//! matching algorithm never touches this module.

use std::borrow::Cow;

use crate::{
    context::ScanContext,
    engine::MatchEngine,
    error::{Error, Result},
    replace::{ReplaceInput, ReplacementStrategy},
    result::MatchResult,
};

/// Finds and redacts sensitive terms using a [`MatchEngine`].
///
/// The processor is stateless: each call is a function of the text, the
/// context and whatever the engine and strategy do. It can be shared across
/// threads whenever the engine can.
#[derive(Clone, Debug, Default)]
pub struct SensitiveWordProcessor<E> {
    engine: E,
}

impl<E> SensitiveWordProcessor<E>
where
    E: MatchEngine,
{
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Returns the engine's matches for `text`, unmodified.
    ///
    /// An empty `text` returns an empty list without calling the engine.
    /// Otherwise the list is exactly what the engine produced: no sorting, no
    /// deduplication.
    pub fn find_all(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let matches = self.engine.locate(text, context).map_err(Error::Engine)?;
        tracing::trace!(
            text_len = text.len(),
            match_count = matches.len(),
            "located matches"
        );
        Ok(matches)
    }

    /// Returns the first element of [`find_all`](Self::find_all).
    ///
    /// This always runs a full scan. Use
    /// [`find_first_fast`](Self::find_first_fast) to let the engine stop at
    /// its first hit.
    pub fn find_first(&self, text: &str, context: &ScanContext) -> Result<Option<MatchResult>> {
        Ok(self.find_all(text, context)?.into_iter().next())
    }

    /// Returns one match via [`MatchEngine::locate_first`].
    ///
    /// Engines that override `locate_first` may return a different match than
    /// [`find_first`](Self::find_first) when their `locate` output is not
    /// sorted by start offset. Presence always agrees.
    pub fn find_first_fast(
        &self,
        text: &str,
        context: &ScanContext,
    ) -> Result<Option<MatchResult>> {
        if text.is_empty() {
            return Ok(None);
        }
        self.engine
            .locate_first(text, context)
            .map_err(Error::Engine)
    }

    /// Whether `text` contains at least one sensitive term.
    pub fn contains(&self, text: &str, context: &ScanContext) -> Result<bool> {
        Ok(self.find_first(text, context)?.is_some())
    }

    /// Returns `text` with every match replaced by the context's strategy.
    ///
    /// Text that is empty or has no matches is returned borrowed. Otherwise
    /// matches are spliced in engine order:
    ///
    /// - text between the end of everything spliced so far and the start of
    ///   the current match is copied once;
    /// - a match starting inside already spliced text copies no gap;
    /// - every match, overlapping or not, appends its own replacement token.
    ///
    /// Overlapping matches can therefore make the output longer than the
    /// input.
    pub fn replace<'t>(&self, text: &'t str, context: &ScanContext) -> Result<Cow<'t, str>> {
        if text.is_empty() {
            return Ok(Cow::Borrowed(text));
        }

        let matches = self.find_all(text, context)?;
        if matches.is_empty() {
            return Ok(Cow::Borrowed(text));
        }

        let output = splice(text, &matches, context.replacement())?;
        tracing::debug!(
            text_len = text.len(),
            match_count = matches.len(),
            output_len = output.len(),
            "replaced sensitive words"
        );
        Ok(Cow::Owned(output))
    }
}

/// Rebuilds `text` from unmodified gaps and replacement tokens.
///
/// `cursor` marks the end of the text already accounted for and only moves
/// forward, so a gap is copied only when a match starts past it. Only the
/// offsets that are actually sliced are checked: a gap start/end, and the
/// cursor before the tail. Entries behind the cursor, or whose end runs past
/// the text, still contribute their token.
fn splice(
    text: &str,
    matches: &[MatchResult],
    replacement: &dyn ReplacementStrategy,
) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    // Span of the entry that last moved the cursor, for error reporting.
    let mut cursor_span = (0, 0);
    for found in matches {
        if cursor < found.start() {
            let gap = text
                .get(cursor..found.start())
                .ok_or_else(|| invalid_span(text, found.start(), found.end()))?;
            output.push_str(gap);
        }

        let input = ReplaceInput::new(found.word());
        let token = replacement
            .replace(&input)
            .map_err(|source| Error::Replacement {
                word_len: input.word_len(),
                source,
            })?;
        output.push_str(&token);

        if found.end() > cursor {
            cursor = found.end();
            cursor_span = (found.start(), found.end());
        }
    }

    if cursor < text.len() {
        let tail = text
            .get(cursor..)
            .ok_or_else(|| invalid_span(text, cursor_span.0, cursor_span.1))?;
        output.push_str(tail);
    }
    Ok(output)
}

fn invalid_span(text: &str, start: usize, end: usize) -> Error {
    Error::InvalidSpan {
        start,
        end,
        text_len: text.len(),
    }
}
