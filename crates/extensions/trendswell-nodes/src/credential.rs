//! Trendswell API credential type.

use serde_json::{Map, Value};

use trendswell_protocols::credential::{CredentialTestRequest, CredentialType};
use trendswell_protocols::node::NodeProperty;
use trendswell_protocols::transport::{HttpMethod, HttpRequest};

use crate::client::DEFAULT_BASE_URL;

/// The `trendswellApi` credential: one opaque token, injected as the
/// `auth-token` header on every outbound call.
pub struct TrendswellApi {
    base_url: String,
    documentation_url: String,
    properties: Vec<NodeProperty>,
}

impl TrendswellApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the credential's test and documentation links at a different
    /// origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            documentation_url: format!("{base_url}/docs"),
            base_url,
            properties: vec![NodeProperty::secret("authToken", "Auth Token").required()],
        }
    }
}

impl Default for TrendswellApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialType for TrendswellApi {
    fn name(&self) -> &str {
        "trendswellApi"
    }

    fn display_name(&self) -> &str {
        "Trendswell API"
    }

    fn documentation_url(&self) -> Option<&str> {
        Some(&self.documentation_url)
    }

    fn properties(&self) -> &[NodeProperty] {
        &self.properties
    }

    fn authenticate(&self, fields: &Map<String, Value>, request: HttpRequest) -> HttpRequest {
        match fields.get("authToken").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => request.with_header("auth-token", token),
            _ => request,
        }
    }

    fn test_request(&self) -> Option<CredentialTestRequest> {
        Some(CredentialTestRequest {
            method: HttpMethod::Get,
            url: format!("{}/user/me", self.base_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trendswell_protocols::node::PropertyKind;

    fn fields(token: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("authToken".to_string(), json!(token));
        map
    }

    #[test]
    fn test_credential_identity() {
        let credential = TrendswellApi::new();
        assert_eq!(credential.name(), "trendswellApi");
        assert_eq!(credential.display_name(), "Trendswell API");
        assert_eq!(
            credential.documentation_url(),
            Some("https://api.trendswell.ai/docs")
        );
    }

    #[test]
    fn test_credential_declares_one_secret_field() {
        let credential = TrendswellApi::new();
        let properties = credential.properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name, "authToken");
        assert_eq!(properties[0].kind, PropertyKind::Secret);
        assert!(properties[0].required);
    }

    #[test]
    fn test_authenticate_injects_header() {
        let credential = TrendswellApi::new();
        let request = credential.authenticate(
            &fields("secret"),
            HttpRequest::new(HttpMethod::Get, "https://api.trendswell.ai/user/me"),
        );
        assert_eq!(request.header("auth-token"), Some("secret"));
    }

    #[test]
    fn test_authenticate_without_token_leaves_request_unchanged() {
        let credential = TrendswellApi::new();
        let request = credential.authenticate(
            &Map::new(),
            HttpRequest::new(HttpMethod::Get, "https://api.trendswell.ai/user/me"),
        );
        assert!(request.header("auth-token").is_none());
    }

    #[test]
    fn test_test_request_targets_user_me() {
        let credential = TrendswellApi::new();
        let test = credential.test_request().unwrap();
        assert_eq!(test.method, HttpMethod::Get);
        assert_eq!(test.url, "https://api.trendswell.ai/user/me");
    }

    #[test]
    fn test_custom_base_url() {
        let credential = TrendswellApi::with_base_url("http://localhost:5000");
        assert_eq!(
            credential.test_request().unwrap().url,
            "http://localhost:5000/user/me"
        );
        assert_eq!(
            credential.documentation_url(),
            Some("http://localhost:5000/docs")
        );
    }
}
