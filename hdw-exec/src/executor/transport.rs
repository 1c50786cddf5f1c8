use std::collections::BTreeMap;

use hdw_core::RequestSpec;
use serde_json::Value as JsonValue;

use crate::credentials::{redact_headers, AuthContext};
use crate::executor::http::{HttpClient, HttpRequestParts, HttpResponseParts};
use crate::executor::result::CallError;
use crate::executor::types::ExecutorConfig;

const MAX_ERROR_BODY_CHARS: usize = 200;

pub fn endpoint_url(base_url: &str, path: &str) -> Result<url::Url, CallError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    url::Url::parse(&raw).map_err(|e| CallError::InvalidUrl(format!("{raw}: {e}")))
}

pub fn to_http_request(
    spec: &RequestSpec,
    config: &ExecutorConfig,
    auth: &AuthContext,
) -> Result<HttpRequestParts, CallError> {
    let url = endpoint_url(&config.base_url, spec.path)?;
    let api_key = String::from_utf8_lossy(auth.api_key.expose_bytes());

    let mut headers = BTreeMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert(config.auth_header.clone(), api_key.to_string());

    let body = serde_json::to_vec(&spec.body).map_err(|e| CallError::Decode(e.to_string()))?;
    Ok(HttpRequestParts {
        method: spec.method.to_string(),
        url,
        headers,
        body,
    })
}

/// Sends one request and decodes the JSON reply.
pub async fn call(
    http: &dyn HttpClient,
    spec: &RequestSpec,
    config: &ExecutorConfig,
    auth: &AuthContext,
) -> Result<JsonValue, CallError> {
    let req = to_http_request(spec, config, auth)?;
    tracing::debug!(
        url = %req.url,
        headers = ?redact_headers(&req.headers, &[config.auth_header.as_str()]),
        "{} {}",
        req.method,
        spec.path
    );
    let resp = http.send(req, config.max_response_bytes).await?;
    tracing::debug!(status = resp.status, bytes = resp.body.len(), "response from {}", spec.path);
    decode_response(resp)
}

pub fn decode_response(resp: HttpResponseParts) -> Result<JsonValue, CallError> {
    if !(200..300).contains(&resp.status) {
        return Err(CallError::Status {
            status: resp.status,
            message: error_message(&resp.body),
        });
    }
    if resp.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(Default::default()));
    }
    serde_json::from_slice(&resp.body).map_err(|e| CallError::Decode(e.to_string()))
}

/// The API's own explanation when the body is JSON, else a prefix of the raw body.
fn error_message(body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<JsonValue>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(s) = json.get(key).and_then(JsonValue::as_str) {
                return s.to_string();
            }
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.chars().count() > MAX_ERROR_BODY_CHARS {
        let cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponseParts {
        HttpResponseParts {
            status,
            headers: BTreeMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let url = endpoint_url("https://api.example.com/", "/api/linkedin/user").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/linkedin/user");
    }

    #[test]
    fn status_errors_use_detail_text() {
        let err = decode_response(response(422, r#"{"detail": "user not found"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "request failed with status 422: user not found");
    }

    #[test]
    fn status_errors_fall_back_to_truncated_body() {
        let body = "x".repeat(500);
        let err = decode_response(response(500, &body)).unwrap_err();
        let CallError::Status { message, .. } = err else {
            panic!("expected status error");
        };
        assert_eq!(message.len(), MAX_ERROR_BODY_CHARS + 3);

        let err = decode_response(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), "request failed with status 404");
    }

    #[test]
    fn non_json_success_is_a_decode_error() {
        assert!(matches!(
            decode_response(response(200, "<html>")),
            Err(CallError::Decode(_))
        ));
        assert_eq!(
            decode_response(response(200, "[1,2]")).unwrap(),
            serde_json::json!([1, 2])
        );
    }
}
