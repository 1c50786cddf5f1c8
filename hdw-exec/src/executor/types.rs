pub const DEFAULT_BASE_URL: &str = "https://api.horizondatawave.ai";
pub const DEFAULT_AUTH_HEADER: &str = "access-token";
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Scheme and host every endpoint path is appended to.
    pub base_url: String,
    /// Turn per-item failures into `{"error": ...}` records instead of stopping.
    pub continue_on_fail: bool,
    /// Header carrying the api key.
    pub auth_header: String,
    pub max_response_bytes: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            continue_on_fail: false,
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}
