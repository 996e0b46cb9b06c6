//! Adapters for logging scan outcomes through `slog`.
//!
//! This module connects [`SensitiveWordProcessor`] with `slog` by providing
//! `slog::Value` implementations whose logged form is derived from the
//! redacted text or from match positions, never from the original text.
//!
//! It is responsible for:
//! - Running `replace` before anything reaches a serializer.
//! - Avoiding fallible logging APIs: processor failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide what is sensitive.

use serde_json::{json, Value as JsonValue};
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    context::ScanContext, engine::MatchEngine, processor::SensitiveWordProcessor,
    result::MatchResult,
};

/// Logged in place of text whose redaction failed.
pub const REDACTION_FAILED_PLACEHOLDER: &str = "[REDACTION FAILED]";

/// A `slog::Value` that emits an already redacted string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactedText {
    value: String,
}

impl RedactedText {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl SlogValue for RedactedText {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.value)
    }
}

/// A `slog::Value` that emits match positions as structured JSON.
///
/// Each match is logged as `{"start": .., "end": .., "len": ..}`. The matched
/// words are left out so the log line does not repeat the sensitive terms.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSummary {
    value: JsonValue,
}

impl MatchSummary {
    pub fn new(matches: &[MatchResult]) -> Self {
        let spans = matches
            .iter()
            .map(|found| {
                json!({
                    "start": found.start(),
                    "end": found.end(),
                    "len": found.len(),
                })
            })
            .collect();
        Self {
            value: JsonValue::Array(spans),
        }
    }
}

impl SlogValue for MatchSummary {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl<E> SensitiveWordProcessor<E>
where
    E: MatchEngine,
{
    /// Redacts `text` and wraps the result for logging.
    ///
    /// If the processor fails, the value logs
    /// [`REDACTION_FAILED_PLACEHOLDER`] instead of the text.
    ///
    /// ## Example
    /// ```ignore
    /// info!(logger, "message received"; "body" => processor.log_redacted(&body, &context));
    /// ```
    pub fn log_redacted(&self, text: &str, context: &ScanContext) -> RedactedText {
        let value = match self.replace(text, context) {
            Ok(redacted) => redacted.into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "redaction failed; logging placeholder");
                REDACTION_FAILED_PLACEHOLDER.to_string()
            }
        };
        RedactedText { value }
    }

    /// Locates matches in `text` and wraps their positions for logging.
    ///
    /// If the engine fails, the summary is an empty list.
    pub fn log_matches(&self, text: &str, context: &ScanContext) -> MatchSummary {
        let matches = self.find_all(text, context).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "match lookup failed; logging empty summary");
            Vec::new()
        });
        MatchSummary::new(&matches)
    }
}
