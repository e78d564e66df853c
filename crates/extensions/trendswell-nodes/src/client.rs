//! HTTP client for the Trendswell backend API.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use trendswell_protocols::error::ApiError;
use trendswell_protocols::transport::{HttpMethod, HttpRequest, HttpTransport};

/// Production Trendswell API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.trendswell.ai";

/// Body of an automated-search request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_text: String,
    pub ai_strength: String,
    pub country_code: String,
    pub examples: Vec<String>,
    pub niches: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterWebhookRequest<'a> {
    url: &'a str,
    webhook_for: &'a str,
}

/// Client for the fixed Trendswell HTTP endpoints.
///
/// Injects the credential token as the `auth-token` header on every call.
/// No retries: a failed call surfaces as an [`ApiError`] carrying the cause.
pub struct TrendswellClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    auth_token: String,
}

impl TrendswellClient {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_token: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: auth_token.into(),
        }
    }

    /// Point the client at a different origin (staging, local backend).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// The authenticated user behind the token. Used as a connectivity test.
    pub async fn current_user(&self) -> Result<Value, ApiError> {
        self.send(self.request(HttpMethod::Get, "/user/me")).await
    }

    /// Run one automated search and return the response body verbatim.
    pub async fn automated_search(&self, request: &SearchRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(
            self.request(HttpMethod::Post, "/n8n/automated-search")
                .with_header("Content-Type", "application/json")
                .with_body(body),
        )
        .await
    }

    /// Fetch a subscription webhook by id.
    pub async fn fetch_webhook(&self, id: &str) -> Result<Value, ApiError> {
        self.send(
            self.request(HttpMethod::Get, &format!("/n8n/webhooks/{id}"))
                .with_header("Accept", "application/json"),
        )
        .await
    }

    /// Register a subscription webhook for the given callback URL and event
    /// category. Returns the backend's response body.
    pub async fn register_webhook(
        &self,
        callback_url: &str,
        webhook_for: &str,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(RegisterWebhookRequest {
            url: callback_url,
            webhook_for,
        })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(
            self.request(HttpMethod::Post, "/n8n/subscription-webhooks")
                .with_header("Content-Type", "application/json")
                .with_body(body),
        )
        .await
    }

    /// Delete a subscription webhook by id.
    pub async fn remove_webhook(&self, id: &str) -> Result<Value, ApiError> {
        self.send(self.request(HttpMethod::Delete, &format!("/n8n/webhooks/{id}")))
            .await
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path}", self.base_url))
            .with_header("auth-token", self.auth_token.as_str())
    }

    async fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(method = %request.method, url = %request.url, "calling Trendswell backend");
        let response = self.transport.request(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: status_message(&response.body),
            });
        }
        Ok(response.body)
    }
}

fn status_message(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
