//! Built-in masking policies for matched words.
//!
//! Policies are pure string transformations over Unicode scalar values. They
//! never look at the surrounding text and never fail.

use std::borrow::Cow;

use super::strategy::{ReplaceInput, ReplacementStrategy};
use crate::error::BoxError;

/// Placeholder used by [`TextReplacementPolicy::default_full`].
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Mask character used when none is configured.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Keeps leading and trailing characters of a word visible and masks the rest.
///
/// If the visible spans cover the whole word, the word is returned unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeepConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_mask_char"))]
    mask_char: char,
}

impl KeepConfig {
    /// Keeps the first `visible_prefix` characters.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self::both(visible_prefix, 0)
    }

    /// Keeps the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self::both(0, visible_suffix)
    }

    /// Keeps `visible_prefix` leading and `visible_suffix` trailing characters.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    fn apply_to(&self, word: &str) -> String {
        let total = word.chars().count();
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return word.to_string();
        }

        let masked_until = total - self.visible_suffix;
        word.chars()
            .enumerate()
            .map(|(ix, ch)| {
                if ix < self.visible_prefix || ix >= masked_until {
                    ch
                } else {
                    self.mask_char
                }
            })
            .collect()
    }
}

/// Masks leading and trailing characters of a word and keeps the middle.
///
/// If the masked spans cover the whole word, every character is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_field_names)]
pub struct MaskConfig {
    mask_prefix: usize,
    mask_suffix: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_mask_char"))]
    mask_char: char,
}

impl MaskConfig {
    /// Masks the first `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self::both(mask_prefix, 0)
    }

    /// Masks the last `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self::both(0, mask_suffix)
    }

    /// Masks `mask_prefix` leading and `mask_suffix` trailing characters.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    fn apply_to(&self, word: &str) -> String {
        let total = word.chars().count();
        let kept_from = self.mask_prefix.min(total);
        let kept_until = total.saturating_sub(self.mask_suffix).max(kept_from);
        word.chars()
            .enumerate()
            .map(|(ix, ch)| {
                if (kept_from..kept_until).contains(&ix) {
                    ch
                } else {
                    self.mask_char
                }
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
fn default_mask_char() -> char {
    DEFAULT_MASK_CHAR
}

/// A replacement policy for matched words.
///
/// This is the data-only way to configure a [`crate::ScanContext`]; arbitrary
/// logic goes through [`ReplacementStrategy`] directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum TextReplacementPolicy {
    /// One mask character per character of the word.
    Repeat {
        #[cfg_attr(feature = "serde", serde(default = "default_mask_char"))]
        mask_char: char,
    },
    /// The whole word becomes a fixed placeholder.
    Full { placeholder: Cow<'static, str> },
    /// Keep configured segments visible, mask the rest.
    Keep(KeepConfig),
    /// Mask configured segments, keep the rest.
    Mask(MaskConfig),
}

impl TextReplacementPolicy {
    /// [`TextReplacementPolicy::Repeat`] with a specific mask character.
    #[must_use]
    pub fn repeat(mask_char: char) -> Self {
        Self::Repeat { mask_char }
    }

    /// [`TextReplacementPolicy::Full`] using [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn default_full() -> Self {
        Self::full_with(REDACTED_PLACEHOLDER)
    }

    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::Mask(MaskConfig::first(mask_prefix))
    }

    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::Mask(MaskConfig::last(mask_suffix))
    }

    /// Overrides the mask character. No effect on [`TextReplacementPolicy::Full`].
    #[must_use]
    pub fn with_mask_char(self, mask_char: char) -> Self {
        match self {
            Self::Full { .. } => self,
            Self::Repeat { .. } => Self::Repeat { mask_char },
            Self::Keep(config) => Self::Keep(config.with_mask_char(mask_char)),
            Self::Mask(config) => Self::Mask(config.with_mask_char(mask_char)),
        }
    }

    /// Applies the policy to a single word.
    #[must_use]
    pub fn apply_to(&self, word: &str) -> String {
        self.apply(&ReplaceInput::new(word))
    }

    fn apply(&self, input: &ReplaceInput<'_>) -> String {
        match self {
            Self::Repeat { mask_char } => {
                std::iter::repeat_n(*mask_char, input.word_len()).collect()
            }
            Self::Full { placeholder } => placeholder.clone().into_owned(),
            Self::Keep(config) => config.apply_to(input.word()),
            Self::Mask(config) => config.apply_to(input.word()),
        }
    }
}

impl Default for TextReplacementPolicy {
    fn default() -> Self {
        Self::repeat(DEFAULT_MASK_CHAR)
    }
}

impl ReplacementStrategy for TextReplacementPolicy {
    fn replace(&self, input: &ReplaceInput<'_>) -> Result<String, BoxError> {
        Ok(self.apply(input))
    }
}
