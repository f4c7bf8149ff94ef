use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, multipart};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::config::HttpConfig;
use shared::errors::ClientError;
use shared::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{debug, error};
use validator::Validate;

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
pub const NEW_ACCESS_TOKEN_HEADER: &str = "new-access-token";

/// Shared access-token slot. The session store writes it on login, the
/// client reads it per request and rotates it when the backend issues a
/// replacement via the `new-access-token` response header.
#[derive(Clone, Debug, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.into());
    }

    pub fn clear(&self) {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    pub fn is_set(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}

/// Every backend payload is wrapped as `{code, msg, data}`. `code == 0`
/// means success.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

pub fn unwrap_envelope<T: DeserializeOwned>(envelope: ApiEnvelope<Value>) -> Result<T, ClientError> {
    if envelope.code != 0 {
        // An invalidated session is flagged by `{"reload": true}` inside the
        // error envelope's data.
        let reload = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("reload"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        return Err(ClientError::Api {
            code: envelope.code,
            message: envelope.msg,
            reload,
        });
    }

    serde_json::from_value(envelope.data.unwrap_or(Value::Null))
        .map_err(|err| ClientError::Decode(err.to_string()))
}

#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    base_url: String,
    token: TokenCell,
    metrics: Metrics,
}

impl RestClient {
    pub fn new(config: &HttpConfig, token: TokenCell, metrics: Metrics) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(std::time::Duration::from_secs(3));

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let http = builder
            .build()
            .with_context(|| format!("Failed to build http client for {}", config.base_url))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token,
            metrics,
        })
    }

    pub fn token(&self) -> TokenCell {
        self.token.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let http_method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(http_method, self.url(path));

        if let Some(token) = self.token.get() {
            builder = builder.header(ACCESS_TOKEN_HEADER, token);
        }

        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let started = Instant::now();
        let result = self.dispatch(builder).await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(_) => {
                debug!("request to {endpoint} completed in {elapsed:.3}s");
                self.metrics.record(method, endpoint, Status::Success, elapsed);
            }
            Err(err) => {
                error!("request to {endpoint} failed: {err}");
                self.metrics.record(method, endpoint, Status::Error, elapsed);
            }
        }

        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;

        if let Some(rotated) = rotated_token(response.headers()) {
            debug!("rotating access token from response header");
            self.token.set(rotated);
        }

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<Value> = response
            .json()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))?;

        unwrap_envelope(envelope)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(Method::Get, path, self.builder(Method::Get, path))
            .await
    }

    /// GET with a dynamic path segment; `endpoint` is the static label used
    /// for logging and metrics.
    pub async fn get_at<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
    ) -> Result<T, ClientError> {
        self.send(Method::Get, endpoint, self.builder(Method::Get, path))
            .await
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::Get, path).query(query);
        self.send(Method::Get, path, builder).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::Post, path).json(body);
        self.send(Method::Post, path, builder).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(Method::Post, path, self.builder(Method::Post, path))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::Put, path).json(body);
        self.send(Method::Put, path, builder).await
    }

    pub async fn delete<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::Delete, path).json(body);
        self.send(Method::Delete, path, builder).await
    }

    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, ClientError> {
        let builder = self.builder(Method::Post, path).multipart(form);
        self.send(Method::Post, path, builder).await
    }
}

/// Replacement access token issued by the backend alongside a response.
fn rotated_token(headers: &reqwest::header::HeaderMap) -> Option<&str> {
    headers
        .get(NEW_ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Client-side form validation, applied before a request leaves the
/// process.
pub(crate) fn validate_request<T: Validate>(input: &T) -> Result<(), ClientError> {
    input.validate().map_err(|errors| {
        let mut details = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "email" => "Invalid email format".to_string(),
                        "url" => "Invalid URL format".to_string(),
                        "length" => "Invalid length".to_string(),
                        "range" => "Value out of range".to_string(),
                        _ => format!("Invalid {field}"),
                    });
                details.push(format!("{field}: {message}"));
            }
        }

        ClientError::Validation(details)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(raw: Value) -> ApiEnvelope<Value> {
        serde_json::from_value(raw).expect("envelope should parse")
    }

    #[test]
    fn unwrap_returns_data_on_code_zero() {
        let envelope = envelope(json!({
            "code": 0,
            "msg": "ok",
            "data": {"captcha_id": "abc", "pic_path": "/tmp/a.png"}
        }));

        let data: Value = unwrap_envelope(envelope).unwrap();
        assert_eq!(data["captcha_id"], "abc");
    }

    #[test]
    fn unwrap_surfaces_msg_on_nonzero_code() {
        let envelope = envelope(json!({"code": 1, "msg": "x", "data": null}));

        let err = unwrap_envelope::<Value>(envelope).unwrap_err();
        match err {
            ClientError::Api {
                code,
                message,
                reload,
            } => {
                assert_eq!(code, 1);
                assert_eq!(message, "x");
                assert!(!reload);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unwrap_detects_reload_flag() {
        let envelope = envelope(json!({
            "code": 7,
            "msg": "session invalidated",
            "data": {"reload": true}
        }));

        let err = unwrap_envelope::<Value>(envelope).unwrap_err();
        assert!(err.requires_relogin());
    }

    #[test]
    fn unwrap_accepts_null_data_for_unit() {
        let envelope = envelope(json!({"code": 0, "msg": "ok", "data": null}));

        unwrap_envelope::<()>(envelope).unwrap();
    }

    #[test]
    fn validation_rejects_malformed_login_before_any_request() {
        let request = crate::domain::requests::user::LoginRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            captcha: "123456".to_string(),
            captcha_id: "captcha-1".to_string(),
        };

        let err = validate_request(&request).unwrap_err();
        match err {
            ClientError::Validation(details) => {
                assert!(details.iter().any(|d| d.starts_with("email:")));
                assert!(details.iter().any(|d| d.starts_with("password:")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rotation_header_updates_the_shared_cell() {
        let mut headers = reqwest::header::HeaderMap::new();
        assert_eq!(rotated_token(&headers), None);

        headers.insert(NEW_ACCESS_TOKEN_HEADER, "fresh-token".parse().unwrap());

        let cell = TokenCell::new();
        if let Some(rotated) = rotated_token(&headers) {
            cell.set(rotated);
        }
        assert_eq!(cell.get().as_deref(), Some("fresh-token"));
    }

    #[test]
    fn token_cell_roundtrip() {
        let cell = TokenCell::new();
        assert!(!cell.is_set());

        cell.set("token-1");
        assert_eq!(cell.get().as_deref(), Some("token-1"));

        let shared = cell.clone();
        shared.set("token-2");
        assert_eq!(cell.get().as_deref(), Some("token-2"));

        cell.clear();
        assert!(cell.get().is_none());
    }
}
