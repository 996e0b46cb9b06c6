//! Denylist term detection and redaction.
//!
//! This crate separates:
//! - **Matching**: where sensitive terms occur in a text ([`MatchEngine`]).
//! - **Replacement**: what a matched term is turned into ([`ReplacementStrategy`]).
//!
//! [`SensitiveWordProcessor`] composes the two. It owns an engine, asks it for
//! raw matches, and splices the replacement tokens back into the text when you
//! call [`SensitiveWordProcessor::replace`].
//!
//! Key rules:
//! - Empty input never reaches the engine.
//! - Matches are used in the order the engine returns them. Nothing is sorted
//!   or deduplicated.
//! - Overlapping matches each contribute their own replacement token, but the
//!   original text between them is copied at most once.
//! - Offsets are UTF-8 byte offsets and must fall on `char` boundaries.
//!
//! What this crate does:
//! - defines [`MatchResult`], [`ScanContext`] and the two collaborator traits
//! - ships a naive scanning engine, an Aho-Corasick engine (feature
//!   `aho-corasick`) and a replaying engine for precomputed matches
//! - ships replacement policies adapted for masking matched words
//! - provides integrations behind feature flags (`serde`, `slog`)
//!
//! What it does not do:
//! - build, load or maintain the denylist
//! - normalize text (case folding, width conversion) before matching
//!
//! ```rust
//! use sensitive_word::{NaiveScanEngine, ScanContext, SensitiveWordProcessor};
//!
//! let processor = SensitiveWordProcessor::new(NaiveScanEngine::new(["bad"]));
//! let context = ScanContext::default();
//!
//! assert!(processor.contains("hello bad word", &context)?);
//! assert_eq!(processor.replace("hello bad word", &context)?, "hello *** word");
//! # Ok::<(), sensitive_word::Error>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod context;
mod engine;
mod error;
mod processor;
mod replace;
mod result;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use context::ScanContext;
#[cfg(feature = "aho-corasick")]
pub use engine::AhoCorasickEngine;
pub use engine::{FnEngine, MatchEngine, NaiveScanEngine, PrecomputedEngine};
pub use error::{BoxError, Error, Result};
pub use processor::SensitiveWordProcessor;
pub use replace::{
    FnReplacement, KeepConfig, MaskConfig, ReplaceInput, ReplacementStrategy,
    TextReplacementPolicy, DEFAULT_MASK_CHAR, REDACTED_PLACEHOLDER,
};
pub use result::MatchResult;
