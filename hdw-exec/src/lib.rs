#![forbid(unsafe_code)]

//! Batch execution against the Horizon Data Wave API.
//!
//! Request assembly lives in `hdw-core`; this crate adds credentials, the HTTP
//! transport, progress events and the sequential item loop.

pub mod credentials;
pub mod executor;

pub use crate::credentials::{AuthContext, Credentials, CredentialsError, CredentialsProvider};
pub use crate::executor::{
    BatchError, BatchOutput, CallError, ExecutionError, Executor, ExecutorConfig, ItemError,
};
