use std::sync::Arc;

use hdw_core::{InputItem, RequestBuilder, RequestSpec, Surface};
use serde_json::Value as JsonValue;

use crate::credentials::AuthContext;
use crate::executor::http::HttpClient;
use crate::executor::result::ItemError;
use crate::executor::transport;
use crate::executor::types::ExecutorConfig;

/// Builds and performs the single call for one item.
pub struct Dispatcher {
    builder: RequestBuilder,
    http: Arc<dyn HttpClient>,
}

impl Dispatcher {
    pub fn new(surface: Surface, http: Arc<dyn HttpClient>) -> Self {
        Self {
            builder: RequestBuilder::for_surface(surface),
            http,
        }
    }

    pub fn prepare(&self, item: &InputItem, auth: &AuthContext) -> Result<RequestSpec, ItemError> {
        Ok(self.builder.build(item, auth.account_id.as_deref())?)
    }

    pub async fn send(
        &self,
        spec: &RequestSpec,
        config: &ExecutorConfig,
        auth: &AuthContext,
    ) -> Result<JsonValue, ItemError> {
        Ok(transport::call(self.http.as_ref(), spec, config, auth).await?)
    }
}
