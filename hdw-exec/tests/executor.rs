use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hdw_core::{InputItem, Surface};
use hdw_exec::credentials::{Credentials, CredentialsError};
use hdw_exec::executor::{
    CallError, Event, EventSink, ExecutionError, Executor, ExecutorConfig, HttpClient, HttpError,
    HttpRequestParts, HttpResponseParts, ItemError,
};
use serde_json::{json, Value as JsonValue};

/// Answers every request with 200 and `{"n": <call number>}`, except the listed
/// call numbers, which get a 500.
struct MockHttpClient {
    fail_calls: Vec<usize>,
    requests: Mutex<Vec<HttpRequestParts>>,
}

impl MockHttpClient {
    fn new(fail_calls: Vec<usize>) -> Self {
        Self {
            fail_calls,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, n: usize) -> HttpRequestParts {
        self.requests.lock().unwrap()[n].clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _max_response_bytes: usize,
    ) -> Result<HttpResponseParts, HttpError> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req);
            requests.len() - 1
        };
        let (status, body) = if self.fail_calls.contains(&n) {
            (500, json!({"detail": "upstream exploded"}))
        } else {
            (200, json!({"n": n}))
        };
        Ok(HttpResponseParts {
            status,
            headers: BTreeMap::new(),
            body: serde_json::to_vec(&body).unwrap(),
        })
    }
}

#[derive(Default)]
struct RecordingEventSink {
    events: Mutex<Vec<Event>>,
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn emit(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

fn profile_items(n: usize) -> Vec<InputItem> {
    InputItem::from_values(
        (0..n)
            .map(|i| json!({"resource": "user", "operation": "getProfile", "user": format!("user-{i}")}))
            .collect(),
    )
}

fn executor(
    http: Arc<MockHttpClient>,
    credentials: Credentials,
    continue_on_fail: bool,
) -> (Executor, Arc<RecordingEventSink>) {
    let events = Arc::new(RecordingEventSink::default());
    let config = ExecutorConfig {
        base_url: "https://api.test".to_string(),
        continue_on_fail,
        ..ExecutorConfig::default()
    };
    let executor = Executor::new(config, http, Arc::new(credentials), events.clone());
    (executor, events)
}

#[tokio::test]
async fn successful_batch_preserves_order() {
    let http = Arc::new(MockHttpClient::new(vec![]));
    let (executor, events) = executor(http.clone(), Credentials::new("key", None), false);

    let out = executor.run_batch(Surface::Query, &profile_items(3)).await.unwrap();

    assert_eq!(http.calls(), 3);
    assert_eq!(out.succeeded, 3);
    assert_eq!(out.failed, 0);
    let ns: Vec<JsonValue> = out.records.iter().map(|r| r.json["n"].clone()).collect();
    assert_eq!(ns, vec![json!(0), json!(1), json!(2)]);

    let events = events.events.lock().unwrap();
    assert!(matches!(events.first(), Some(Event::BatchStarted { items: 3, .. })));
    assert!(matches!(
        events.last(),
        Some(Event::BatchFinished { succeeded: 3, failed: 0, .. })
    ));
}

#[tokio::test]
async fn abort_stops_at_first_failure() {
    let http = Arc::new(MockHttpClient::new(vec![2]));
    let (executor, events) = executor(http.clone(), Credentials::new("key", None), false);

    let err = executor.run_batch(Surface::Query, &profile_items(5)).await.unwrap_err();

    assert_eq!(http.calls(), 3, "items after the failure are never attempted");
    let ExecutionError::Aborted(batch) = err else {
        panic!("expected aborted batch");
    };
    assert_eq!(batch.index, 2);
    assert_eq!(batch.records.len(), 2);
    assert_eq!(
        batch.source,
        ItemError::Call(CallError::Status {
            status: 500,
            message: "upstream exploded".to_string()
        })
    );
    assert!(events
        .events
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, Event::BatchAborted { index: 2, .. })));
}

#[tokio::test]
async fn continue_on_fail_records_errors_in_place() {
    let http = Arc::new(MockHttpClient::new(vec![1, 3]));
    let (executor, _) = executor(http.clone(), Credentials::new("key", None), true);

    let out = executor.run_batch(Surface::Query, &profile_items(5)).await.unwrap();

    assert_eq!(http.calls(), 5);
    assert_eq!(out.records.len(), 5);
    assert_eq!(out.failed, 2);
    assert!(out.records[1].is_error());
    assert!(out.records[3].is_error());
    assert_eq!(
        out.records[1].json,
        json!({"error": "request failed with status 500: upstream exploded"})
    );
    assert_eq!(out.records[4].json, json!({"n": 4}));
}

#[tokio::test]
async fn parameter_errors_are_per_item() {
    let http = Arc::new(MockHttpClient::new(vec![]));
    let (executor, _) = executor(http.clone(), Credentials::new("key", None), true);
    let items = InputItem::from_values(vec![
        json!({"resource": "user", "operation": "getProfile", "user": "a"}),
        json!({"resource": "user", "operation": "getProfile"}),
        json!({"resource": "chat", "operation": "getMessages"}),
        json!({"resource": "user", "operation": "getProfile", "user": "b"}),
    ]);

    let out = executor.run_batch(Surface::Query, &items).await.unwrap();

    assert_eq!(http.calls(), 2);
    assert_eq!(
        out.records[1].json,
        json!({"error": "missing required parameter: user"})
    );
    assert_eq!(
        out.records[2].json,
        json!({"error": "no query route for chat/getMessages"})
    );
    assert_eq!(out.records[3].json, json!({"n": 1}));
}

#[tokio::test]
async fn missing_account_id_fails_before_any_call() {
    let http = Arc::new(MockHttpClient::new(vec![]));
    let (executor, events) = executor(http.clone(), Credentials::new("key", None), true);
    let items = InputItem::from_values(vec![json!({"resource": "user", "operation": "getMe"})]);

    let err = executor.run_batch(Surface::Management, &items).await.unwrap_err();

    assert!(matches!(
        err,
        ExecutionError::Credentials(CredentialsError::MissingAccountId { .. })
    ));
    assert!(err.records().is_empty());
    assert_eq!(http.calls(), 0);
    assert!(events.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_api_key_fails_before_any_call() {
    let http = Arc::new(MockHttpClient::new(vec![]));
    let (executor, _) = executor(http.clone(), Credentials::default(), true);

    let err = executor.run_batch(Surface::Query, &profile_items(2)).await.unwrap_err();

    assert!(matches!(err, ExecutionError::Credentials(CredentialsError::MissingApiKey)));
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn management_requests_carry_account_and_auth_header() {
    let http = Arc::new(MockHttpClient::new(vec![]));
    let (executor, _) = executor(
        http.clone(),
        Credentials::new("secret-key", Some("acc-7".to_string())),
        false,
    );
    let items = InputItem::from_values(vec![json!({
        "resource": "chat",
        "operation": "sendMessage",
        "user": "fsd_profile:ACoAA1",
        "text": "hi"
    })]);

    executor.run_batch(Surface::Management, &items).await.unwrap();

    let req = http.request(0);
    assert_eq!(req.method, "POST");
    assert_eq!(
        req.url.as_str(),
        "https://api.test/api/linkedin/management/chat/message"
    );
    assert_eq!(req.headers["access-token"], "secret-key");
    assert_eq!(req.headers["Content-Type"], "application/json");
    let body: JsonValue = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(
        body,
        json!({
            "timeout": 300,
            "account_id": "acc-7",
            "user": "fsd_profile:ACoAA1",
            "text": "hi"
        })
    );
}
