use async_trait::async_trait;
use hdw_core::Surface;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BatchStarted {
        batch_id: Uuid,
        surface: Surface,
        items: usize,
    },
    ItemStarted {
        batch_id: Uuid,
        index: usize,
        path: &'static str,
    },
    ItemSucceeded {
        batch_id: Uuid,
        index: usize,
    },
    ItemFailed {
        batch_id: Uuid,
        index: usize,
        error: String,
    },
    BatchAborted {
        batch_id: Uuid,
        index: usize,
        error: String,
    },
    BatchFinished {
        batch_id: Uuid,
        succeeded: usize,
        failed: usize,
    },
}

impl Event {
    pub fn batch_id(&self) -> Uuid {
        match self {
            Event::BatchStarted { batch_id, .. }
            | Event::ItemStarted { batch_id, .. }
            | Event::ItemSucceeded { batch_id, .. }
            | Event::ItemFailed { batch_id, .. }
            | Event::BatchAborted { batch_id, .. }
            | Event::BatchFinished { batch_id, .. } => *batch_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::BatchStarted { .. } => "batch.started",
            Event::ItemStarted { .. } => "item.started",
            Event::ItemSucceeded { .. } => "item.succeeded",
            Event::ItemFailed { .. } => "item.failed",
            Event::BatchAborted { .. } => "batch.aborted",
            Event::BatchFinished { .. } => "batch.finished",
        }
    }

    pub fn to_json(&self) -> JsonValue {
        let batch_id = self.batch_id().to_string();
        let kind = self.kind();
        match self {
            Event::BatchStarted { surface, items, .. } => {
                json!({ "type": kind, "batch_id": batch_id, "surface": surface.as_str(), "items": items })
            }
            Event::ItemStarted { index, path, .. } => {
                json!({ "type": kind, "batch_id": batch_id, "index": index, "path": path })
            }
            Event::ItemSucceeded { index, .. } => {
                json!({ "type": kind, "batch_id": batch_id, "index": index })
            }
            Event::ItemFailed { index, error, .. } | Event::BatchAborted { index, error, .. } => {
                json!({ "type": kind, "batch_id": batch_id, "index": index, "error": error })
            }
            Event::BatchFinished { succeeded, failed, .. } => {
                json!({ "type": kind, "batch_id": batch_id, "succeeded": succeeded, "failed": failed })
            }
        }
    }
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

/// JSON lines on stdout, one per event, with an RFC 3339 timestamp.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        let mut json = event.to_json();
        if let Some(obj) = json.as_object_mut() {
            obj.insert("ts".to_string(), json!(chrono::Utc::now().to_rfc3339()));
        }
        println!("{}", serde_json::to_string(&json).unwrap_or_default());
    }
}

pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: Event) {
        match &event {
            Event::BatchStarted { batch_id, surface, items } => {
                tracing::info!(%batch_id, %surface, items, "batch started");
            }
            Event::ItemStarted { batch_id, index, path } => {
                tracing::debug!(%batch_id, index, path, "item started");
            }
            Event::ItemSucceeded { batch_id, index } => {
                tracing::debug!(%batch_id, index, "item succeeded");
            }
            Event::ItemFailed { batch_id, index, error } => {
                tracing::warn!(%batch_id, index, %error, "item failed");
            }
            Event::BatchAborted { batch_id, index, error } => {
                tracing::error!(%batch_id, index, %error, "batch aborted");
            }
            Event::BatchFinished { batch_id, succeeded, failed } => {
                tracing::info!(%batch_id, succeeded, failed, "batch finished");
            }
        }
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_and_batch() {
        let batch_id = Uuid::new_v4();
        let json = Event::ItemFailed {
            batch_id,
            index: 3,
            error: "boom".into(),
        }
        .to_json();
        assert_eq!(json["type"], "item.failed");
        assert_eq!(json["batch_id"], batch_id.to_string());
        assert_eq!(json["index"], 3);
        assert_eq!(json["error"], "boom");
    }
}
