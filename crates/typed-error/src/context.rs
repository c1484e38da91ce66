use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely typed value stored in an error's diagnostic context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl ContextValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ContextValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContextValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            ContextValue::Null => Value::Null,
            ContextValue::Bool(b) => Value::Bool(*b),
            ContextValue::Int(i) => Value::from(*i),
            ContextValue::UInt(u) => Value::from(*u),
            // NaN and infinities have no JSON form and become null
            ContextValue::Float(x) => Value::from(*x),
            ContextValue::String(s) => Value::String(s.clone()),
            ContextValue::Json(v) => v.clone(),
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Null => f.write_str("null"),
            ContextValue::Bool(b) => write!(f, "{b}"),
            ContextValue::Int(i) => write!(f, "{i}"),
            ContextValue::UInt(u) => write!(f, "{u}"),
            ContextValue::Float(x) => write!(f, "{x}"),
            ContextValue::String(s) => f.write_str(s),
            ContextValue::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<()> for ContextValue {
    fn from(_: ()) -> Self {
        ContextValue::Null
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::String(s.to_owned())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::String(s)
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        ContextValue::Bool(b)
    }
}

impl From<i32> for ContextValue {
    fn from(i: i32) -> Self {
        ContextValue::Int(i.into())
    }
}

impl From<i64> for ContextValue {
    fn from(i: i64) -> Self {
        ContextValue::Int(i)
    }
}

impl From<u32> for ContextValue {
    fn from(u: u32) -> Self {
        ContextValue::UInt(u.into())
    }
}

impl From<u64> for ContextValue {
    fn from(u: u64) -> Self {
        ContextValue::UInt(u)
    }
}

impl From<usize> for ContextValue {
    fn from(u: usize) -> Self {
        ContextValue::UInt(u as u64)
    }
}

impl From<f64> for ContextValue {
    fn from(x: f64) -> Self {
        ContextValue::Float(x)
    }
}

impl From<serde_json::Value> for ContextValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ContextValue::Null,
            other => ContextValue::Json(other),
        }
    }
}

impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ContextValue::Null, Into::into)
    }
}

/// The single key/value pair attached to a [`TypedError`](crate::TypedError).
///
/// A pair whose key and value are both null is empty, and an empty context
/// counts as no context at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
    pub key: ContextValue,
    pub value: ContextValue,
}

impl Context {
    pub fn new(key: impl Into<ContextValue>, value: impl Into<ContextValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_null() && self.value.is_null()
    }

    /// `None` when the pair is empty.
    pub fn non_empty(&self) -> Option<&Context> {
        (!self.is_empty()).then_some(self)
    }
}
