//! Remote webhook subscription lifecycle.
//!
//! One conceptual resource per node instance: the subscription registered
//! with the Trendswell backend. The only durable state is the backend's
//! identifier in the node's static data; its presence means "subscribed",
//! its absence means "not subscribed".

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use trendswell_protocols::error::WebhookError;
use trendswell_protocols::static_data::StaticDataStore;

use crate::client::TrendswellClient;

/// Static-data key holding the backend-assigned webhook id.
pub const WEBHOOK_ID_KEY: &str = "webhookId";

/// Drives the create/check/delete lifecycle of one remote subscription.
pub struct SubscriptionManager {
    client: TrendswellClient,
    store: Arc<dyn StaticDataStore>,
}

impl SubscriptionManager {
    pub fn new(client: TrendswellClient, store: Arc<dyn StaticDataStore>) -> Self {
        Self { client, store }
    }

    /// The persisted subscription id, if any.
    ///
    /// The backend contract only promises "an id"; numeric ids are
    /// normalized to their string form.
    pub fn stored_id(&self) -> Option<String> {
        match self.store.get(WEBHOOK_ID_KEY) {
            Some(Value::String(id)) => Some(id),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Whether the remote subscription is known to exist.
    ///
    /// Without a stored id this answers `false` without touching the
    /// network. With one, any failure to fetch the remote resource also
    /// reads as "does not exist": a transient failure and a confirmed
    /// deletion both fall through to recreation, which is idempotent.
    pub async fn exists(&self) -> bool {
        let Some(id) = self.stored_id() else {
            return false;
        };

        match self.client.fetch_webhook(&id).await {
            Ok(_) => true,
            Err(err) => {
                debug!(webhook_id = %id, error = %err, "subscription check failed, treating as absent");
                false
            }
        }
    }

    /// Register a subscription for the given callback URL and event
    /// category, and persist the backend-assigned id.
    pub async fn subscribe(
        &self,
        callback_url: &str,
        webhook_for: &str,
    ) -> Result<(), WebhookError> {
        if self.client.auth_token().is_empty() {
            return Err(WebhookError::MissingAuthToken);
        }

        let response = self.client.register_webhook(callback_url, webhook_for).await?;

        let id = match response.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return Err(WebhookError::MissingWebhookId),
        };

        self.store.set(WEBHOOK_ID_KEY, Value::String(id.clone()));
        debug!(webhook_id = %id, webhook_for, "registered subscription webhook");
        Ok(())
    }

    /// Delete the remote subscription and forget its id.
    ///
    /// Without a stored id this is a successful no-op. On failure the
    /// stored id stays in place so a later deactivation can retry.
    pub async fn unsubscribe(&self) -> Result<(), WebhookError> {
        let Some(id) = self.stored_id() else {
            return Ok(());
        };

        if let Err(err) = self.client.remove_webhook(&id).await {
            warn!(webhook_id = %id, error = %err, "failed to delete subscription webhook");
            return Err(err.into());
        }

        self.store.remove(WEBHOOK_ID_KEY);
        debug!(webhook_id = %id, "deleted subscription webhook");
        Ok(())
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
