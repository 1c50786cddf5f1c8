use serde_json::{Map, Value as JsonValue};

/// A fully assembled API call. Always a POST with a JSON object body.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RequestSpec {
    pub method: &'static str,
    pub path: &'static str,
    pub body: Map<String, JsonValue>,
}

impl RequestSpec {
    pub fn post(path: &'static str, body: Map<String, JsonValue>) -> Self {
        Self {
            method: "POST",
            path,
            body,
        }
    }

    pub fn body_json(&self) -> JsonValue {
        JsonValue::Object(self.body.clone())
    }
}
