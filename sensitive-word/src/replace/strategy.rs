//! The contract between the splice pass and whatever produces masks.

use std::{fmt, sync::Arc};

use crate::error::BoxError;

/// What a [`ReplacementStrategy`] sees for one match.
///
/// `word_len` is the number of Unicode scalar values in `word`. It is carried
/// alongside the word so fixed-width masks do not have to recount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplaceInput<'a> {
    word: &'a str,
    word_len: usize,
}

impl<'a> ReplaceInput<'a> {
    #[must_use]
    pub fn new(word: &'a str) -> Self {
        Self {
            word,
            word_len: word.chars().count(),
        }
    }

    /// The matched word as reported by the engine.
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Length of the word in Unicode scalar values.
    pub fn word_len(&self) -> usize {
        self.word_len
    }
}

/// Turns a matched word into the text spliced in its place.
///
/// The returned string may be empty, shorter or longer than the word; the
/// processor makes no assumption about its length. Strategies are shared
/// across threads through [`crate::ScanContext`], hence `Send + Sync`.
pub trait ReplacementStrategy: Send + Sync {
    fn replace(&self, input: &ReplaceInput<'_>) -> Result<String, BoxError>;
}

impl<S> ReplacementStrategy for Box<S>
where
    S: ReplacementStrategy + ?Sized,
{
    fn replace(&self, input: &ReplaceInput<'_>) -> Result<String, BoxError> {
        (**self).replace(input)
    }
}

impl<S> ReplacementStrategy for Arc<S>
where
    S: ReplacementStrategy + ?Sized,
{
    fn replace(&self, input: &ReplaceInput<'_>) -> Result<String, BoxError> {
        (**self).replace(input)
    }
}

/// Adapts a closure into a [`ReplacementStrategy`].
///
/// ```rust
/// use sensitive_word::{FnReplacement, ReplaceInput, ReplacementStrategy};
///
/// let angle = FnReplacement::new(|input: &ReplaceInput<'_>| {
///     Ok(format!("<{}>", input.word_len()))
/// });
/// assert_eq!(angle.replace(&ReplaceInput::new("bad")).unwrap(), "<3>");
/// ```
#[derive(Clone, Copy)]
pub struct FnReplacement<F>(F);

impl<F> FnReplacement<F> {
    pub fn new(f: F) -> Self
    where
        F: Fn(&ReplaceInput<'_>) -> Result<String, BoxError> + Send + Sync,
    {
        Self(f)
    }
}

impl<F> fmt::Debug for FnReplacement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnReplacement").finish_non_exhaustive()
    }
}

impl<F> ReplacementStrategy for FnReplacement<F>
where
    F: Fn(&ReplaceInput<'_>) -> Result<String, BoxError> + Send + Sync,
{
    fn replace(&self, input: &ReplaceInput<'_>) -> Result<String, BoxError> {
        (self.0)(input)
    }
}
