//! Client layer: orchestrates validation, credential resolution and the transport call.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::credentials::{CredentialError, Credentials, KeySource};
use crate::domain::{ApiKey, ContactId, MessageText, SendMessage, ValidationError};

const DEFAULT_SEND_ENDPOINT: &str = "https://mw.alerty.com.br/rest/instance/sendMessage";
const JSON_CONTENT_TYPE: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.body(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AlertyClient`].
///
/// Validation and credential failures happen before any network activity.
/// Transport failures keep the underlying HTTP client error as their source.
pub enum AlertyError {
    /// The recipient number (or a builder setting) was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No API key could be resolved.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// HTTP client / transport failure (DNS, TLS, connection reset, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`AlertyClient`].
///
/// Use this when you need a custom key source, endpoint, timeout, or user-agent.
pub struct AlertyClientBuilder {
    credentials: Credentials,
    send_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AlertyClientBuilder {
    /// Create a builder with the default endpoint, the environment key source and
    /// no timeout/user-agent override.
    pub fn new() -> Self {
        Self {
            credentials: Credentials::from_env(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the override API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.set_key(key);
        self
    }

    /// Replace the fallback key source (the process environment by default).
    pub fn key_source(mut self, source: impl KeySource + 'static) -> Self {
        self.credentials.set_source(source);
        self
    }

    /// Override the `sendMessage` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`AlertyClient`].
    ///
    /// Fails with [`ValidationError::InvalidEndpoint`] if the endpoint is not an
    /// absolute URL.
    pub fn build(self) -> Result<AlertyClient, AlertyError> {
        url::Url::parse(&self.send_endpoint).map_err(|_| ValidationError::InvalidEndpoint {
            input: self.send_endpoint.clone(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| AlertyError::Transport(Box::new(err)))?;

        Ok(AlertyClient {
            credentials: self.credentials,
            send_endpoint: self.send_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for AlertyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level Alerty ACM client.
///
/// Each send validates the recipient, resolves the API key and issues exactly one
/// `POST` to `https://mw.alerty.com.br/rest/instance/sendMessage`. There are no
/// retries and no timeout unless one is set on the builder.
///
/// The override key lives in the client value, so clones can carry different keys
/// while sharing the underlying connection pool.
pub struct AlertyClient {
    credentials: Credentials,
    send_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl AlertyClient {
    /// Create a client that reads `ALERTY_ACM_API_KEY` from the environment.
    ///
    /// For more customization, use [`AlertyClient::builder`].
    pub fn new() -> Self {
        Self {
            credentials: Credentials::from_env(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client with an override API key.
    pub fn with_key(key: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.set_key(key);
        client
    }

    /// Start building a client with custom settings.
    pub fn builder() -> AlertyClientBuilder {
        AlertyClientBuilder::new()
    }

    /// Replace the override API key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.credentials.set_key(key);
    }

    /// Clear the override API key, falling back to the key source.
    pub fn unset_key(&mut self) {
        self.credentials.unset_key();
    }

    /// Resolve the API key the next request would use.
    pub fn resolve_key(&self) -> Result<ApiKey, CredentialError> {
        self.credentials.resolve_key()
    }

    /// Send `message` to the contact `number`.
    ///
    /// Returns the decoded response body unchanged.
    ///
    /// Errors:
    /// - [`AlertyError::Validation`] unless `number` is exactly 11 ASCII digits,
    /// - [`AlertyError::Credential`] when no API key is configured,
    /// - [`AlertyError::Transport`] / [`AlertyError::HttpStatus`] when the request fails.
    pub async fn send_message(
        &self,
        number: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Value, AlertyError> {
        let to = ContactId::new(number)?;
        self.send(SendMessage::new(to, MessageText::new(message))).await
    }

    /// Send an already validated request.
    pub async fn send(&self, request: SendMessage) -> Result<Value, AlertyError> {
        let api_key = self.credentials.resolve_key()?;
        let body = crate::transport::encode_send_message_json(&request)
            .map_err(|err| AlertyError::Encode(Box::new(err)))?;

        let headers = vec![
            (ApiKey::HEADER.to_owned(), api_key.as_str().to_owned()),
            (
                reqwest::header::CONTENT_TYPE.as_str().to_owned(),
                JSON_CONTENT_TYPE.to_owned(),
            ),
        ];

        tracing::debug!(
            endpoint = %self.send_endpoint,
            to = %request.to(),
            "sending message"
        );

        let response = self
            .http
            .post_json(&self.send_endpoint, headers, body)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "sendMessage transport failure");
                AlertyError::Transport(err)
            })?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "sendMessage returned non-success status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(AlertyError::HttpStatus {
                status: response.status,
                body,
            });
        }

        crate::transport::decode_send_message_json_response(&response.body)
            .map_err(|err| AlertyError::Parse(Box::new(err)))
    }
}

impl Default for AlertyClient {
    fn default() -> Self {
        Self::new()
    }
}
