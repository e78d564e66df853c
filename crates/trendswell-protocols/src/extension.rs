//! Extension trait and registration surface.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::credential::CredentialType;
use crate::error::ExtensionError;
use crate::node::ActionNode;
use crate::webhook::WebhookNode;

/// Extension version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// What an extension provides to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provides {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub credentials: Vec<String>,
}

/// Extension manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    pub id: String,
    pub name: String,
    pub version: Version,
    pub description: String,
    #[serde(default)]
    pub provides: Provides,
}

impl ExtensionManifest {
    /// Create a new extension manifest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: Version) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version,
            description: String::new(),
            provides: Provides::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Trait for accessing the node registry from extensions.
pub trait NodeRegistryAccess: Send + Sync {
    /// Register an action node.
    fn register_action(&self, node: Arc<dyn ActionNode>) -> Result<(), ExtensionError>;

    /// Register a webhook trigger node.
    fn register_webhook(&self, node: Arc<dyn WebhookNode>) -> Result<(), ExtensionError>;
}

/// Trait for accessing the credential registry from extensions.
pub trait CredentialRegistryAccess: Send + Sync {
    /// Register a credential type.
    fn register_credential(&self, credential: Arc<dyn CredentialType>)
        -> Result<(), ExtensionError>;
}

/// Context handed to an extension during initialization.
#[derive(Clone)]
pub struct ExtensionContext {
    pub nodes: Arc<dyn NodeRegistryAccess>,
    pub credentials: Arc<dyn CredentialRegistryAccess>,
}

/// Core trait for node-package extensions.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Register everything this extension provides.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;

    /// Shutdown the extension.
    async fn shutdown(&self) -> Result<(), ExtensionError> {
        Ok(())
    }
}
