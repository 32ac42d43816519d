//! Canonical bytes: the single serialization-for-keying implementation.
//!
//! **Exactly one place** produces canonical bytes in this workspace. Every
//! structural-equality key flows through [`canonical_bytes`], so two values
//! that serialize to the same shape compare equal no matter how they were
//! constructed.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are emitted in lexicographic byte order.
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected to
//!    prevent cross-platform formatting drift.
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

use serde::Serialize;

/// Error type for canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// The value's `Serialize` impl reported a failure.
    Serialize { detail: String },
    /// A number in the value was not an integer.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { detail } => {
                write!(f, "value is not canonically serializable: {detail}")
            }
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical form: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce the canonical byte form of any serializable value.
///
/// The output is deterministic: structurally equal values yield identical
/// bytes regardless of field insertion order or construction site.
///
/// # Errors
///
/// Returns [`CanonError::Serialize`] if the value cannot be represented in
/// the serde data model, or [`CanonError::NonIntegerNumber`] if it contains
/// a number not representable as `i64` or `u64`.
pub fn canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonError> {
    let tree = serde_json::to_value(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })?;
    let mut buf = Vec::new();
    emit(&mut buf, &tree)?;
    Ok(buf)
}

fn emit(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => buf.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => buf.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => emit_number(buf, n)?,
        serde_json::Value::String(s) => emit_string(buf, s),
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                emit(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(fields) => {
            // Sort keys explicitly rather than relying on the map's internal
            // ordering, which depends on serde_json feature flags.
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                emit_string(buf, key);
                buf.push(b':');
                emit(buf, &fields[*key])?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn emit_number(buf: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    // i64 first (covers negatives), then u64 (covers large positives).
    if let Some(i) = n.as_i64() {
        let _ = write!(buf, "{i}");
        Ok(())
    } else if let Some(u) = n.as_u64() {
        let _ = write!(buf, "{u}");
        Ok(())
    } else {
        Err(CanonError::NonIntegerNumber { raw: n.to_string() })
    }
}

fn emit_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8_buf = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8_buf).as_bytes());
            }
        }
    }
    buf.push(b'"');
}
