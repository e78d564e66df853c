//! Webhook lifecycle errors.

use thiserror::Error;

use super::ApiError;

#[derive(Debug, Error)]
pub enum WebhookError {
    /// The credential carries no token. Configuration error, never retried.
    #[error("Auth token missing in Trendswell credentials")]
    MissingAuthToken,

    /// The backend accepted the registration but returned no identifier.
    #[error("No webhook id returned from backend")]
    MissingWebhookId,

    #[error(transparent)]
    Api(#[from] ApiError),
}
