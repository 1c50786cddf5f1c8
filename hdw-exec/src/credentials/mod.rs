mod error;
mod provider;
mod redact;
mod value;

pub use error::CredentialsError;
pub use provider::{
    AuthContext, CompositeCredentialsProvider, Credentials, CredentialsProvider,
    EnvCredentialsProvider, FileCredentialsProvider, ACCOUNT_ID_ENV, API_KEY_ENV,
};
pub use redact::{redact_headers, REDACTED};
pub use value::SecretValue;
