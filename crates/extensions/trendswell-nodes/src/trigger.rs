//! Trendswell trigger node.

use async_trait::async_trait;
use serde_json::Value;

use trendswell_protocols::context::HookContext;
use trendswell_protocols::error::WebhookError;
use trendswell_protocols::execution::ExecutionData;
use trendswell_protocols::node::{
    CredentialRequirement, NodeDescription, NodeGroup, NodeProperty, PropertyOption,
};
use trendswell_protocols::transport::HttpMethod;
use trendswell_protocols::webhook::{WebhookDescription, WebhookNode};

use crate::client::{TrendswellClient, DEFAULT_BASE_URL};
use crate::inbound;
use crate::subscription::SubscriptionManager;

const DEFAULT_WEBHOOK_FOR: &str = "trendswell-searches";

/// Trigger node starting the workflow when a Trendswell event occurs.
///
/// Activation registers a subscription webhook with the backend;
/// deactivation removes it. Inbound pushes are normalized into output
/// records.
pub struct TrendswellTrigger {
    description: NodeDescription,
    webhook: WebhookDescription,
    base_url: String,
}

impl TrendswellTrigger {
    pub fn new() -> Self {
        Self {
            description: build_description(),
            webhook: WebhookDescription::new("default", HttpMethod::Post, "trendswell"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the node at a different backend origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn manager(&self, ctx: &HookContext) -> SubscriptionManager {
        let auth_token = ctx
            .context()
            .credential("authToken")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let client = TrendswellClient::new(ctx.context().transport(), auth_token)
            .with_base_url(self.base_url.as_str());
        SubscriptionManager::new(client, ctx.static_data())
    }
}

impl Default for TrendswellTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookNode for TrendswellTrigger {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn webhook_description(&self) -> &WebhookDescription {
        &self.webhook
    }

    async fn check_exists(&self, ctx: &HookContext) -> bool {
        self.manager(ctx).exists().await
    }

    async fn create(&self, ctx: &HookContext) -> Result<(), WebhookError> {
        let webhook_for = ctx
            .context()
            .raw_parameter("webhookFor")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_WEBHOOK_FOR);

        self.manager(ctx)
            .subscribe(ctx.webhook_url(), webhook_for)
            .await
    }

    async fn delete(&self, ctx: &HookContext) -> Result<(), WebhookError> {
        self.manager(ctx).unsubscribe().await
    }

    fn receive(&self, body: Value) -> Vec<ExecutionData> {
        inbound::into_execution_data(body)
    }
}

fn build_description() -> NodeDescription {
    NodeDescription::new(
        "trendswellTrigger",
        "Trendswell Trigger",
        "Starts the workflow when a Trendswell event occurs",
    )
    .with_group(NodeGroup::Trigger)
    .with_icon("file:trendswell.svg")
    .with_inputs(vec![])
    .with_property(
        NodeProperty::options(
            "webhookFor",
            "Webhook For",
            vec![PropertyOption::new(
                "Trendswell Searches",
                DEFAULT_WEBHOOK_FOR,
            )],
        )
        .with_default(DEFAULT_WEBHOOK_FOR)
        .with_description("The type of event this webhook listens for"),
    )
    .with_credential(CredentialRequirement::required("trendswellApi"))
}
