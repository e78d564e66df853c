//! Node execution errors.

use thiserror::Error;

use super::ApiError;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Missing credential field: {0}")]
    MissingCredential(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
