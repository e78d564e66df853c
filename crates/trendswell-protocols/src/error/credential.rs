//! Credential verification errors.

use thiserror::Error;

use super::TransportError;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential test failed: HTTP {status}")]
    TestFailed { status: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),
}
