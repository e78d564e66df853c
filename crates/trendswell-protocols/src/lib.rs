//! # Trendswell Protocols
//!
//! The slice of workflow-host API the Trendswell integration consumes,
//! modeled as injected abstractions so every component can be exercised
//! without a real host or network.
//!
//! ## Core Traits
//!
//! - [`ActionNode`] - Trait for request/response workflow nodes
//! - [`WebhookNode`] - Trait for trigger nodes with a remote webhook lifecycle
//! - [`CredentialType`] - Trait for credential declarations
//! - [`HttpTransport`] - Minimal (method, url, headers, body) HTTP interface
//! - [`StaticDataStore`] - Per-node persistent key/value storage
//! - [`Extension`] - Registration entry point for a node package

pub mod context;
pub mod credential;
pub mod error;
pub mod execution;
pub mod extension;
pub mod node;
pub mod static_data;
pub mod transport;
pub mod webhook;

// Re-export core traits
pub use context::{ExecutionContext, HookContext};
pub use credential::{CredentialTestRequest, CredentialType};
pub use error::{
    ApiError, CredentialError, ExtensionError, NodeError, TransportError, WebhookError,
};
pub use execution::ExecutionData;
pub use extension::{Extension, ExtensionContext, ExtensionManifest};
pub use node::{ActionNode, NodeDescription, NodeProperty, PropertyOption};
pub use static_data::{InMemoryStaticData, StaticDataStore};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use webhook::{WebhookDescription, WebhookNode};
