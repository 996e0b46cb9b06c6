//! Match engines: the pluggable half that finds sensitive terms.
//!
//! The processor only talks to [`MatchEngine`]. Each built-in engine is one
//! matching strategy, chosen when the processor is constructed:
//!
//! - **`naive`**: substring search per denylisted word.
//! - **`aho`**: a single Aho-Corasick automaton over the whole denylist.
//! - **`precomputed`**: replays matches found elsewhere.
//!
//! Engines may return matches in any order and may return duplicate or
//! nested spans. Offsets must be valid byte offsets into the scanned text.

#[cfg(feature = "aho-corasick")]
mod aho;
mod naive;
mod precomputed;

use std::{fmt, sync::Arc};

#[cfg(feature = "aho-corasick")]
pub use aho::AhoCorasickEngine;
pub use naive::NaiveScanEngine;
pub use precomputed::PrecomputedEngine;

use crate::{context::ScanContext, error::BoxError, result::MatchResult};

/// Locates sensitive terms in a text.
pub trait MatchEngine: Send + Sync {
    /// Returns every match in `text`.
    ///
    /// Ordering and uniqueness are up to the engine.
    fn locate(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>, BoxError>;

    /// Returns one match, or `None` if `text` is clean.
    ///
    /// The default takes the first element of [`MatchEngine::locate`]. Engines
    /// that can stop at the first hit should override this.
    fn locate_first(
        &self,
        text: &str,
        context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        Ok(self.locate(text, context)?.into_iter().next())
    }
}

impl<E> MatchEngine for &E
where
    E: MatchEngine + ?Sized,
{
    fn locate(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        (**self).locate(text, context)
    }

    fn locate_first(
        &self,
        text: &str,
        context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        (**self).locate_first(text, context)
    }
}

impl<E> MatchEngine for Box<E>
where
    E: MatchEngine + ?Sized,
{
    fn locate(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        (**self).locate(text, context)
    }

    fn locate_first(
        &self,
        text: &str,
        context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        (**self).locate_first(text, context)
    }
}

impl<E> MatchEngine for Arc<E>
where
    E: MatchEngine + ?Sized,
{
    fn locate(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        (**self).locate(text, context)
    }

    fn locate_first(
        &self,
        text: &str,
        context: &ScanContext,
    ) -> Result<Option<MatchResult>, BoxError> {
        (**self).locate_first(text, context)
    }
}

/// Adapts a closure into a [`MatchEngine`].
#[derive(Clone, Copy)]
pub struct FnEngine<F>(F);

impl<F> FnEngine<F> {
    pub fn new(f: F) -> Self
    where
        F: Fn(&str, &ScanContext) -> Result<Vec<MatchResult>, BoxError> + Send + Sync,
    {
        Self(f)
    }
}

impl<F> fmt::Debug for FnEngine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEngine").finish_non_exhaustive()
    }
}

impl<F> MatchEngine for FnEngine<F>
where
    F: Fn(&str, &ScanContext) -> Result<Vec<MatchResult>, BoxError> + Send + Sync,
{
    fn locate(&self, text: &str, context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        (self.0)(text, context)
    }
}
