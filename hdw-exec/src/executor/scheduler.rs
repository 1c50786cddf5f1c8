use std::sync::Arc;

use hdw_core::{InputItem, OutputRecord, Surface};
use uuid::Uuid;

use crate::credentials::{AuthContext, CredentialsProvider};
use crate::executor::dispatcher::Dispatcher;
use crate::executor::events::{Event, EventSink};
use crate::executor::http::HttpClient;
use crate::executor::result::{BatchError, BatchOutput, ExecutionError, ItemError};
use crate::executor::types::ExecutorConfig;

pub struct Executor {
    config: ExecutorConfig,
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialsProvider>,
    event_sink: Arc<dyn EventSink>,
}

impl Executor {
    pub fn new(
        config: ExecutorConfig,
        http: Arc<dyn HttpClient>,
        credentials: Arc<dyn CredentialsProvider>,
        event_sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            http,
            credentials,
            event_sink,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Runs every item in order, one call at a time.
    ///
    /// Credentials are checked before the first call; a failure there yields no
    /// records at all. Without `continue_on_fail` the first failing item stops
    /// the batch and later items are never attempted.
    pub async fn run_batch(
        &self,
        surface: Surface,
        items: &[InputItem],
    ) -> Result<BatchOutput, ExecutionError> {
        let auth = self.credentials.load().await?.require(surface)?;
        let dispatcher = Dispatcher::new(surface, self.http.clone());
        let batch_id = Uuid::new_v4();

        self.event_sink
            .emit(Event::BatchStarted {
                batch_id,
                surface,
                items: items.len(),
            })
            .await;

        let mut output = BatchOutput {
            batch_id,
            records: Vec::with_capacity(items.len()),
            succeeded: 0,
            failed: 0,
        };

        for item in items {
            match self.run_item(&dispatcher, batch_id, item, &auth).await {
                Ok(json) => {
                    output.succeeded += 1;
                    output.records.push(OutputRecord::success(json));
                }
                Err(err) if self.config.continue_on_fail => {
                    output.failed += 1;
                    output.records.push(OutputRecord::error(err.to_string()));
                }
                Err(err) => {
                    self.event_sink
                        .emit(Event::BatchAborted {
                            batch_id,
                            index: item.index,
                            error: err.to_string(),
                        })
                        .await;
                    return Err(BatchError {
                        index: item.index,
                        source: err,
                        records: output.records,
                    }
                    .into());
                }
            }
        }

        self.event_sink
            .emit(Event::BatchFinished {
                batch_id,
                succeeded: output.succeeded,
                failed: output.failed,
            })
            .await;
        Ok(output)
    }

    async fn run_item(
        &self,
        dispatcher: &Dispatcher,
        batch_id: Uuid,
        item: &InputItem,
        auth: &AuthContext,
    ) -> Result<serde_json::Value, ItemError> {
        let result = match dispatcher.prepare(item, auth) {
            Ok(spec) => {
                self.event_sink
                    .emit(Event::ItemStarted {
                        batch_id,
                        index: item.index,
                        path: spec.path,
                    })
                    .await;
                dispatcher.send(&spec, &self.config, auth).await
            }
            Err(e) => Err(e),
        };

        let event = match &result {
            Ok(_) => Event::ItemSucceeded {
                batch_id,
                index: item.index,
            },
            Err(e) => Event::ItemFailed {
                batch_id,
                index: item.index,
                error: e.to_string(),
            },
        };
        self.event_sink.emit(event).await;
        result
    }
}
