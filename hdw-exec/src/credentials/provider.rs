use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hdw_core::Surface;
use serde::Deserialize;

use super::{CredentialsError, SecretValue};

pub const API_KEY_ENV: &str = "HDW_API_KEY";
pub const ACCOUNT_ID_ENV: &str = "HDW_ACCOUNT_ID";

/// Credentials as found by a provider. Either part may be missing.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub account_id: Option<String>,
    pub api_key: Option<SecretValue>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, account_id: Option<String>) -> Self {
        Self {
            account_id,
            api_key: Some(SecretValue::from_string(api_key.into())),
        }
    }

    /// Fills parts missing here from `other`.
    pub fn or(self, other: Credentials) -> Credentials {
        Credentials {
            account_id: self.account_id.or(other.account_id),
            api_key: self.api_key.or(other.api_key),
        }
    }

    /// Checks that everything `surface` needs is present.
    pub fn require(&self, surface: Surface) -> Result<AuthContext, CredentialsError> {
        let api_key = self
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(CredentialsError::MissingApiKey)?;
        let account_id = self
            .account_id
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        if surface == Surface::Management && account_id.is_none() {
            return Err(CredentialsError::MissingAccountId { surface });
        }
        Ok(AuthContext {
            account_id,
            api_key,
        })
    }
}

/// Validated, read-only credentials shared by every item of a batch.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Option<String>,
    pub api_key: SecretValue,
}

#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn load(&self) -> Result<Credentials, CredentialsError>;
}

#[async_trait]
impl CredentialsProvider for Credentials {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Earlier providers win; later ones only fill in what is still missing.
#[derive(Default)]
pub struct CompositeCredentialsProvider {
    providers: Vec<Box<dyn CredentialsProvider>>,
}

impl CompositeCredentialsProvider {
    pub fn new(providers: Vec<Box<dyn CredentialsProvider>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl CredentialsProvider for CompositeCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        let mut out = Credentials::default();
        for p in &self.providers {
            out = out.or(p.load().await?);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct EnvCredentialsProvider {
    pub api_key_var: String,
    pub account_id_var: String,
}

impl Default for EnvCredentialsProvider {
    fn default() -> Self {
        Self {
            api_key_var: API_KEY_ENV.to_string(),
            account_id_var: ACCOUNT_ID_ENV.to_string(),
        }
    }
}

fn read_env(key: &str) -> Result<Option<String>, CredentialsError> {
    match std::env::var(key) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(CredentialsError::Provider(format!("{key}: {e}"))),
    }
}

#[async_trait]
impl CredentialsProvider for EnvCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        Ok(Credentials {
            account_id: read_env(&self.account_id_var)?,
            api_key: read_env(&self.api_key_var)?.map(SecretValue::from_string),
        })
    }
}

/// Reads `{ "apiKey": ..., "accountId": ... }` from a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    pub path: PathBuf,
}

impl FileCredentialsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsFile {
    #[serde(default, alias = "api_key")]
    api_key: Option<String>,
    #[serde(default, alias = "account_id")]
    account_id: Option<String>,
}

fn parse_credentials_file(path: &Path, content: &str) -> Result<CredentialsFile, CredentialsError> {
    let parse_err = |message: String| CredentialsError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match serde_json::from_str(content) {
        Ok(v) => Ok(v),
        Err(json_err) => serde_yaml::from_str(content)
            .map_err(|yaml_err| parse_err(format!("not JSON ({json_err}) or YAML ({yaml_err})"))),
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CredentialsError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        let file = parse_credentials_file(&self.path, &content)?;
        Ok(Credentials {
            account_id: file.account_id.filter(|a| !a.trim().is_empty()),
            api_key: file
                .api_key
                .filter(|k| !k.trim().is_empty())
                .map(SecretValue::from_string),
        })
    }
}
