mod dispatcher;
pub mod events;
pub mod http;
mod result;
mod scheduler;
pub mod transport;
mod types;

pub use dispatcher::Dispatcher;
pub use events::{
    CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink, TracingEventSink,
};
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
pub use result::{BatchError, BatchOutput, CallError, ExecutionError, ItemError};
pub use scheduler::Executor;
pub use types::{ExecutorConfig, DEFAULT_AUTH_HEADER, DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_BYTES};
