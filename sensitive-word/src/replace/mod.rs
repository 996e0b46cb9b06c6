//! Replacement side of the splice pass.
//!
//! - **`strategy`**: the [`ReplacementStrategy`] contract and its input.
//! - **`policy`**: built-in masking policies (`TextReplacementPolicy`).

mod policy;
mod strategy;

pub use policy::{
    KeepConfig, MaskConfig, TextReplacementPolicy, DEFAULT_MASK_CHAR, REDACTED_PLACEHOLDER,
};
pub use strategy::{FnReplacement, ReplaceInput, ReplacementStrategy};
