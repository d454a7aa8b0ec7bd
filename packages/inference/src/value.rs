//! Classification of raw JSON scope values.
//!
//! Every value flowing through inference is classified once into a
//! [`ScopeValue`], so the inferer recurses over a closed set of shapes.

use crate::error::{InferenceError, InferenceResult};
use serde_json::{Map, Value};

/// The named values a user expression may reference, in enumeration order
pub type Scope = Map<String, Value>;

/// Borrowed, closed view over a JSON-like value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScopeValue<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    String,
    Number,
    Boolean,
    Null,
}

impl<'a> ScopeValue<'a> {
    /// Classify a JSON value
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => ScopeValue::Object(map),
            Value::Array(items) => ScopeValue::Array(items),
            Value::String(_) => ScopeValue::String,
            Value::Number(_) => ScopeValue::Number,
            Value::Bool(_) => ScopeValue::Boolean,
            Value::Null => ScopeValue::Null,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScopeValue::Object(_) => "object",
            ScopeValue::Array(_) => "array",
            ScopeValue::String => "string",
            ScopeValue::Number => "number",
            ScopeValue::Boolean => "boolean",
            ScopeValue::Null => "null",
        }
    }
}

impl<'a> From<&'a Value> for ScopeValue<'a> {
    fn from(value: &'a Value) -> Self {
        ScopeValue::classify(value)
    }
}

/// Parse scope text into a [`Scope`]
pub fn parse_scope(source: &str) -> InferenceResult<Scope> {
    let value: Value = serde_json::from_str(source)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(InferenceError::NotAnObject(
            ScopeValue::classify(&other).kind(),
        )),
    }
}
