//! Per-call configuration threaded through every processor operation.

use std::{fmt, sync::Arc};

use crate::replace::{ReplacementStrategy, TextReplacementPolicy};

/// Configuration for one scan.
///
/// A context holds exactly one [`ReplacementStrategy`]. It is read-only to the
/// processor and cheap to clone, so one context can be reused across requests
/// and threads as long as its strategy is stateless.
#[derive(Clone)]
pub struct ScanContext {
    replacement: Arc<dyn ReplacementStrategy>,
}

impl ScanContext {
    pub fn new<S>(replacement: S) -> Self
    where
        S: ReplacementStrategy + 'static,
    {
        Self::from_shared(Arc::new(replacement))
    }

    /// Uses a strategy that is already shared elsewhere.
    pub fn from_shared(replacement: Arc<dyn ReplacementStrategy>) -> Self {
        Self { replacement }
    }

    /// Returns a copy of this context with a different strategy.
    #[must_use]
    pub fn with_replacement<S>(mut self, replacement: S) -> Self
    where
        S: ReplacementStrategy + 'static,
    {
        self.replacement = Arc::new(replacement);
        self
    }

    /// The active replacement strategy.
    pub fn replacement(&self) -> &dyn ReplacementStrategy {
        self.replacement.as_ref()
    }
}

/// Masks every matched character with `*`.
impl Default for ScanContext {
    fn default() -> Self {
        Self::new(TextReplacementPolicy::default())
    }
}

impl fmt::Debug for ScanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanContext").finish_non_exhaustive()
    }
}
