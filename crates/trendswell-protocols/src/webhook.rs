//! Webhook trigger-node trait and declaration types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::HookContext;
use crate::error::WebhookError;
use crate::execution::ExecutionData;
use crate::node::NodeDescription;
use crate::transport::HttpMethod;

/// When the host acknowledges an inbound delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseMode {
    /// Acknowledge as soon as the payload is received.
    OnReceived,
}

/// Declaration of the inbound webhook endpoint a trigger node listens on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookDescription {
    pub name: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub response_mode: ResponseMode,
}

impl WebhookDescription {
    pub fn new(name: impl Into<String>, http_method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_method,
            path: path.into(),
            response_mode: ResponseMode::OnReceived,
        }
    }
}

/// A trigger node backed by a remote webhook subscription.
///
/// The host drives the lifecycle: on activation it calls [`check_exists`]
/// and, if that returns `false`, [`create`]; on deactivation it calls
/// [`delete`]. Inbound deliveries are handed to [`receive`].
///
/// [`check_exists`]: WebhookNode::check_exists
/// [`create`]: WebhookNode::create
/// [`delete`]: WebhookNode::delete
/// [`receive`]: WebhookNode::receive
#[async_trait]
pub trait WebhookNode: Send + Sync {
    /// Returns the node declaration.
    fn description(&self) -> &NodeDescription;

    /// Returns the inbound webhook declaration.
    fn webhook_description(&self) -> &WebhookDescription;

    /// Whether the remote subscription is known to exist.
    ///
    /// Infallible on purpose: any failure to confirm the subscription reads
    /// as "does not exist" so activation falls through to [`create`].
    ///
    /// [`create`]: WebhookNode::create
    async fn check_exists(&self, ctx: &HookContext) -> bool;

    /// Register the remote subscription for this node's callback URL.
    async fn create(&self, ctx: &HookContext) -> Result<(), WebhookError>;

    /// Remove the remote subscription. A no-op when none is registered.
    async fn delete(&self, ctx: &HookContext) -> Result<(), WebhookError>;

    /// Normalize one inbound delivery into output records.
    ///
    /// Total: every payload shape maps to zero or more records.
    fn receive(&self, body: Value) -> Vec<ExecutionData>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_description_defaults() {
        let description = WebhookDescription::new("default", HttpMethod::Post, "trendswell");
        assert_eq!(description.name, "default");
        assert_eq!(description.http_method, HttpMethod::Post);
        assert_eq!(description.path, "trendswell");
        assert_eq!(description.response_mode, ResponseMode::OnReceived);
    }

    #[test]
    fn test_response_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&ResponseMode::OnReceived).unwrap(),
            "\"onReceived\""
        );
    }
}
