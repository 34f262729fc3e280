use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single method invocation received over a channel: a method name plus
/// optional, schema-free arguments supplied by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self { method: method.into(), args: None }
    }

    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }
}

/// Outcome of a method invocation.
///
/// `NotImplemented` is a defined result value, not an error: it tells the
/// caller that the handler does not support the requested method name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodResult {
    Value(Value),
    NotImplemented,
}

impl MethodResult {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResult::NotImplemented)
    }

    /// Returns the payload for successful results, `None` for the sentinel.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MethodResult::Value(value) => Some(value),
            MethodResult::NotImplemented => None,
        }
    }
}

impl From<Value> for MethodResult {
    fn from(value: Value) -> Self {
        MethodResult::Value(value)
    }
}

impl From<String> for MethodResult {
    fn from(value: String) -> Self {
        MethodResult::Value(Value::String(value))
    }
}
