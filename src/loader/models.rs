use crate::loader::consts::READY_STATE_DONE;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    /// Lifecycle stage the request ended in, numbered the way browsers number them.
    pub ready_state: u8,
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn done(status: u16, body: impl Into<String>) -> Self {
        Self {
            ready_state: READY_STATE_DONE,
            status,
            body: body.into(),
        }
    }

    pub fn is_complete_and_ok(&self) -> bool {
        self.ready_state == READY_STATE_DONE && self.status == 200
    }
}

/// Raw text of a successfully loaded resource. Decoding is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseContent {
    text: String,
}

impl ResponseContent {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.text)
    }

    /// Returns the decoded body if it is JSON with a truthy `error` field.
    pub fn error_marker(&self) -> Option<Value> {
        let body = self.json().ok()?;
        if is_truthy(body.get("error")?) {
            Some(body)
        } else {
            None
        }
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .map_or(true, |number| number != 0.0 && !number.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
