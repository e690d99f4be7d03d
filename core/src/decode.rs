//! Big-integer-safe JSON decoding of API reply bodies.
//!
//! # Design
//! The remote API returns 64-bit-plus identifiers and counters as bare JSON
//! integer literals. Decoding those through `f64` silently rounds them, so
//! the body is parsed with serde_json's `arbitrary_precision` representation
//! and every integer literal outside the exact `i64`/`u64` range is rewritten
//! into its original string form, recursively. Float literals keep standard
//! `f64` semantics.
//!
//! Decode failure is part of the return value, not an error: the remote
//! occasionally answers with empty or non-JSON bodies, and callers treat
//! those the same as "nothing usable came back". [`Decoded`] keeps the three
//! cases distinguishable while [`Decoded::into_value`] collapses them to an
//! `Option` for callers that only care whether a value arrived.

use serde_json::{Number, Value};

/// Outcome of decoding one response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The body parsed as JSON. Oversized integer literals appear as their
    /// original string form.
    Value(Value),

    /// The body was empty or whitespace.
    Empty,

    /// The body was not valid JSON. Never raised as an error.
    Invalid,
}

impl Decoded {
    /// The parsed value, if one arrived.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Decoded::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses to an `Option`, losing the empty/invalid distinction.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Decoded::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Decoded::Empty)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Decoded::Invalid)
    }
}

/// Decodes an API reply body, preserving oversized integers as strings.
pub fn decode_body(body: &[u8]) -> Decoded {
    let text = match std::str::from_utf8(body) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("discarding non-UTF-8 response body: {err}");
            return Decoded::Invalid;
        }
    };
    if text.trim().is_empty() {
        return Decoded::Empty;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Decoded::Value(widen(value)),
        Err(err) => {
            log::debug!("discarding unparseable response body: {err}");
            Decoded::Invalid
        }
    }
}

fn widen(value: Value) -> Value {
    match value {
        Value::Number(number) => widen_number(number),
        Value::Array(items) => Value::Array(items.into_iter().map(widen).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(key, item)| (key, widen(item))).collect())
        }
        other => other,
    }
}

fn widen_number(number: Number) -> Value {
    if number.is_i64() || number.is_u64() {
        return Value::Number(number);
    }
    // `as_str` is the literal as it appeared in the body. Anything with a
    // fraction or exponent is a float literal and stays numeric.
    let literal = number.as_str();
    if literal.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
        return Value::Number(number);
    }
    Value::String(literal.to_owned())
}
