//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `log_redacted()` emits the redacted text, never the original
//! - `log_matches()` emits spans as nested JSON without the matched words
//! - processor failures become placeholders instead of logging errors

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use sensitive_word::{
    slog::REDACTION_FAILED_PLACEHOLDER, FnEngine, MatchResult, NaiveScanEngine,
    PrecomputedEngine, ScanContext, SensitiveWordProcessor,
};
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer
}

#[test]
fn test_log_redacted_emits_masked_text() {
    let processor = SensitiveWordProcessor::new(NaiveScanEngine::new(["hunter2"]));
    let value = processor.log_redacted("my password is hunter2", &ScanContext::default());

    let captured = serialize_to_capture(&value, "body");
    assert_eq!(
        captured.get("body"),
        Some(CapturedValue::Str("my password is *******".into()))
    );
}

#[test]
fn test_log_redacted_passes_clean_text() {
    let processor = SensitiveWordProcessor::new(NaiveScanEngine::new(["hunter2"]));
    let value = processor.log_redacted("nothing to see", &ScanContext::default());
    assert_eq!(value.as_str(), "nothing to see");
}

#[test]
fn test_log_redacted_failure_uses_placeholder() {
    let processor = SensitiveWordProcessor::new(PrecomputedEngine::new([MatchResult::new(
        "oops", 50, 60,
    )]));
    let value = processor.log_redacted("secret text", &ScanContext::default());

    let captured = serialize_to_capture(&value, "body");
    assert_eq!(
        captured.get("body"),
        Some(CapturedValue::Str(REDACTION_FAILED_PLACEHOLDER.into()))
    );
}

#[test]
fn test_log_matches_emits_spans_without_words() {
    let processor = SensitiveWordProcessor::new(NaiveScanEngine::new(["hunter2"]));
    let value = processor.log_matches("hunter2 and hunter2", &ScanContext::default());

    let captured = serialize_to_capture(&value, "matches");
    let Some(CapturedValue::Serde(json)) = captured.get("matches") else {
        panic!("expected nested serde value");
    };
    assert_eq!(
        json,
        json!([
            { "start": 0, "end": 7, "len": 7 },
            { "start": 12, "end": 19, "len": 7 },
        ])
    );
    assert!(!json.to_string().contains("hunter2"));
}

#[test]
fn test_log_matches_engine_failure_is_empty() {
    let processor = SensitiveWordProcessor::new(FnEngine::new(|_: &str, _: &ScanContext| {
        Err("offline".into())
    }));
    let value = processor.log_matches("text", &ScanContext::default());

    let captured = serialize_to_capture(&value, "matches");
    assert_eq!(captured.get("matches"), Some(CapturedValue::Serde(json!([]))));
}
