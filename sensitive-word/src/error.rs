//! Failures surfaced by the processor.
//!
//! The processor has no recovery logic. Collaborator failures are wrapped
//! once and carried as the error `source`, so callers can downcast to the
//! engine's or strategy's own error type.

use thiserror::Error;

/// Boxed error returned by [`crate::MatchEngine`] and
/// [`crate::ReplacementStrategy`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The match engine failed to locate matches.
    #[error("match engine failed")]
    Engine(#[source] BoxError),

    /// The replacement strategy failed for a matched word.
    #[error("replacement strategy failed for a {word_len}-character word")]
    Replacement {
        word_len: usize,
        #[source]
        source: BoxError,
    },

    /// A gap or tail slice derived from this span falls outside the text or
    /// inside a `char`.
    #[error("match span {start}..{end} is not valid for a text of {text_len} bytes")]
    InvalidSpan {
        start: usize,
        end: usize,
        text_len: usize,
    },

    /// The Aho-Corasick automaton could not be built from the denylist.
    #[cfg(feature = "aho-corasick")]
    #[error("failed to build denylist automaton")]
    EngineBuild(#[from] aho_corasick::BuildError),
}
