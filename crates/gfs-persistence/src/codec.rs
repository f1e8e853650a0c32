//! Session encoding and the untrusted-document decoder.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, SessionError};
use crate::types::{PAYLOAD_VERSION, SessionSnapshot};

/// The session state recovered from an imported document, already
/// sanitized: string-only answers and an in-range step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredSession {
    /// Surviving answer entries.
    pub answers: BTreeMap<String, String>,

    /// Step to restore, clamped into `[0, page_count]`.
    pub step: usize,
}

/// Encode a snapshot as pretty-printed JSON.
pub fn encode(snapshot: &SessionSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| SessionError::Serialization { source: Box::new(e) })
}

/// Decode and sanitize an untrusted session document.
///
/// Fails with [`SessionError::InvalidFormat`] when the text is not
/// well-formed JSON, the root is not an object, or the `answers` key is
/// missing. Everything else is recovered per field:
///
/// - answer entries whose value is not a string are dropped silently
/// - an `answers` value that is not an object restores an empty sheet
/// - `currentStep` must be a JSON number (fractions truncate toward zero),
///   defaults to 0 otherwise, and is always clamped into `[0, page_count]`
pub fn decode(raw: &str, page_count: usize) -> Result<RestoredSession> {
    let value: Value = serde_json::from_str(raw).map_err(|e| SessionError::InvalidFormat {
        reason: format!("not well-formed JSON: {e}"),
    })?;

    let Value::Object(root) = value else {
        return Err(SessionError::InvalidFormat {
            reason: "document root is not an object".to_string(),
        });
    };

    let Some(answers_value) = root.get("answers") else {
        return Err(SessionError::InvalidFormat {
            reason: "missing `answers` field".to_string(),
        });
    };

    if let Some(version) = root.get("version").and_then(Value::as_u64)
        && version > u64::from(PAYLOAD_VERSION)
    {
        tracing::warn!(
            version,
            "session file was written by a newer format version; importing anyway"
        );
    }

    let mut answers = BTreeMap::new();
    match answers_value {
        Value::Object(entries) => {
            for (field, entry) in entries {
                match entry {
                    Value::String(text) => {
                        answers.insert(field.clone(), text.clone());
                    }
                    _ => {
                        tracing::debug!(field = %field, "dropping non-string answer entry");
                    }
                }
            }
        }
        _ => {
            tracing::warn!("`answers` is not an object; restoring an empty sheet");
        }
    }

    let step = match root.get("currentStep") {
        Some(Value::Number(n)) => {
            let raw_step = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0);
            raw_step.clamp(0, page_count as i64) as usize
        }
        _ => 0,
    };

    Ok(RestoredSession { answers, step })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_camel_case_envelope() {
        let mut answers = BTreeMap::new();
        answers.insert("step-0-nombre".to_string(), "Acme".to_string());
        let snapshot = SessionSnapshot::new(1, answers);

        let json = encode(&snapshot).expect("encode snapshot");
        assert!(json.contains("\"version\": 1"));
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"currentStep\": 1"));
        assert!(json.contains("\"step-0-nombre\": \"Acme\""));
    }

    #[test]
    fn decode_rejects_non_object_root() {
        let err = decode("[1, 2, 3]", 3).unwrap_err();
        assert!(matches!(err, SessionError::InvalidFormat { .. }));
    }

    #[test]
    fn decode_rejects_missing_answers() {
        let err = decode(r#"{"currentStep": 1}"#, 3).unwrap_err();
        assert!(matches!(err, SessionError::InvalidFormat { .. }));
    }

    #[test]
    fn decode_truncates_fractional_step() {
        let restored = decode(r#"{"answers": {}, "currentStep": 1.9}"#, 3).unwrap();
        assert_eq!(restored.step, 1);
    }

    #[test]
    fn decode_tolerates_newer_version() {
        let restored = decode(r#"{"version": 99, "answers": {"a": "b"}}"#, 3).unwrap();
        assert_eq!(restored.answers.len(), 1);
    }
}
