use serde_json::{Map, Value as JsonValue};

/// One unit of work: its position in the batch and its parameter bag.
#[derive(Debug, Clone, PartialEq)]
pub struct InputItem {
    pub index: usize,
    pub params: Map<String, JsonValue>,
}

impl InputItem {
    pub fn new(index: usize, params: Map<String, JsonValue>) -> Self {
        Self { index, params }
    }

    /// Builds one item per JSON object, in order. Non-object entries become empty items.
    pub fn from_values(values: Vec<JsonValue>) -> Vec<InputItem> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, v)| match v {
                JsonValue::Object(params) => InputItem::new(index, params),
                _ => InputItem::new(index, Map::new()),
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.params.get(name)
    }
}

/// Output for one item: the decoded response, or `{"error": message}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputRecord {
    pub json: JsonValue,
}

impl OutputRecord {
    pub fn success(json: JsonValue) -> Self {
        Self { json }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            json: serde_json::json!({ "error": message.into() }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.json
            .as_object()
            .is_some_and(|m| m.len() == 1 && m.get("error").is_some_and(JsonValue::is_string))
    }
}
