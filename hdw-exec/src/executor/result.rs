use hdw_core::{BuildError, OutputRecord};
use uuid::Uuid;

use crate::credentials::CredentialsError;
use crate::executor::http::HttpError;

/// Failure of the remote call for one item.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
    #[error("request failed with status {status}{}", fmt_detail(.message))]
    Status { status: u16, message: String },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("response too large (>{max_bytes} bytes)")]
    ResponseTooLarge { max_bytes: usize },
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
}

fn fmt_detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl From<HttpError> for CallError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Timeout => CallError::Timeout,
            HttpError::Network(m) | HttpError::Other(m) => CallError::Network(m),
            HttpError::ResponseTooLarge { max_bytes } => CallError::ResponseTooLarge { max_bytes },
        }
    }
}

/// Everything that can go wrong for a single item.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Call(#[from] CallError),
}

/// A batch stopped at item `index`. `records` holds the output of the items before it.
#[derive(Debug, thiserror::Error)]
#[error("item {index} failed: {source}")]
pub struct BatchError {
    pub index: usize,
    pub source: ItemError,
    pub records: Vec<OutputRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Aborted(#[from] BatchError),
}

impl ExecutionError {
    /// Records produced before the batch stopped. Empty for precondition failures.
    pub fn records(&self) -> &[OutputRecord] {
        match self {
            ExecutionError::Credentials(_) => &[],
            ExecutionError::Aborted(e) => &e.records,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub batch_id: Uuid,
    pub records: Vec<OutputRecord>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutput {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
