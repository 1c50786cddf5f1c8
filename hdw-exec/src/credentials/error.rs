use std::path::PathBuf;

use hdw_core::Surface;

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("missing api key (set HDW_API_KEY or provide a credentials file)")]
    MissingApiKey,
    #[error("missing account id, required for {surface} requests (set HDW_ACCOUNT_ID)")]
    MissingAccountId { surface: Surface },
    #[error("failed to read credentials file {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("invalid credentials file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("credentials provider error: {0}")]
    Provider(String),
}
