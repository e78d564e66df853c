//! Credential type trait and connectivity test.

use serde_json::{Map, Value};

use crate::error::CredentialError;
use crate::node::NodeProperty;
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};

/// A lightweight request the host issues to verify a credential works.
#[derive(Debug, Clone)]
pub struct CredentialTestRequest {
    pub method: HttpMethod,
    pub url: String,
}

/// Declaration of a credential type: its user-facing fields and how its
/// values authenticate an outbound request.
pub trait CredentialType: Send + Sync {
    /// Unique identifier for the credential type.
    fn name(&self) -> &str;

    /// Human-readable name.
    fn display_name(&self) -> &str;

    fn documentation_url(&self) -> Option<&str> {
        None
    }

    /// The user-facing fields of this credential.
    fn properties(&self) -> &[NodeProperty];

    /// Apply the credential's field values to an outbound request.
    fn authenticate(&self, fields: &Map<String, Value>, request: HttpRequest) -> HttpRequest;

    /// The connectivity self-test, if the credential declares one.
    fn test_request(&self) -> Option<CredentialTestRequest> {
        None
    }
}

/// Run a credential's connectivity test through the given transport.
///
/// Credentials without a declared test pass vacuously. A non-success status
/// maps to [`CredentialError::TestFailed`]; transport failures propagate.
pub async fn run_credential_test(
    credential: &dyn CredentialType,
    fields: &Map<String, Value>,
    transport: &dyn HttpTransport,
) -> Result<(), CredentialError> {
    let Some(test) = credential.test_request() else {
        return Ok(());
    };

    let request = credential.authenticate(fields, HttpRequest::new(test.method, test.url));
    let response = transport.request(request).await?;

    if response.is_success() {
        Ok(())
    } else {
        Err(CredentialError::TestFailed {
            status: response.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::HttpResponse;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    struct TokenCredential {
        properties: Vec<NodeProperty>,
    }

    impl TokenCredential {
        fn new() -> Self {
            Self {
                properties: vec![NodeProperty::secret("authToken", "Auth Token").required()],
            }
        }
    }

    impl CredentialType for TokenCredential {
        fn name(&self) -> &str {
            "tokenCredential"
        }

        fn display_name(&self) -> &str {
            "Token Credential"
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
                url: "https://api.example.com/user/me".to_string(),
            })
        }
    }

    struct ScriptedTransport {
        status: u16,
        requests: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().push(request);
            Ok(HttpResponse::new(self.status, Value::Null))
        }
    }

    fn fields(token: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("authToken".to_string(), json!(token));
        map
    }

    #[tokio::test]
    async fn test_credential_test_success() {
        let transport = ScriptedTransport {
            status: 200,
            requests: Mutex::new(Vec::new()),
        };
        let credential = TokenCredential::new();

        run_credential_test(&credential, &fields("secret"), &transport)
            .await
            .unwrap();

        let requests = transport.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("auth-token"), Some("secret"));
        assert_eq!(requests[0].url, "https://api.example.com/user/me");
    }

    #[tokio::test]
    async fn test_credential_test_failure_status() {
        let transport = ScriptedTransport {
            status: 401,
            requests: Mutex::new(Vec::new()),
        };
        let credential = TokenCredential::new();

        let result = run_credential_test(&credential, &fields("bad"), &transport).await;
        assert!(matches!(
            result,
            Err(CredentialError::TestFailed { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_authenticate_skips_empty_token() {
        let credential = TokenCredential::new();
        let request = credential.authenticate(
            &fields(""),
            HttpRequest::new(HttpMethod::Get, "https://api.example.com/user/me"),
        );
        assert!(request.header("auth-token").is_none());
    }
}
