//! Invocation contexts supplied by the host.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::NodeError;
use crate::static_data::StaticDataStore;
use crate::transport::HttpTransport;

/// Context for one node execution: configured parameters, the resolved
/// credential fields, and the transport to reach the outside world with.
#[derive(Clone)]
pub struct ExecutionContext {
    transport: Arc<dyn HttpTransport>,
    parameters: Map<String, Value>,
    credentials: Map<String, Value>,
}

impl ExecutionContext {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            parameters: Map::new(),
            credentials: Map::new(),
        }
    }

    /// Set a configured parameter value.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set a resolved credential field.
    pub fn with_credential(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.credentials.insert(name.into(), value.into());
        self
    }

    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.transport)
    }

    /// Read a required parameter, deserialized into the requested type.
    pub fn parameter<T: DeserializeOwned>(&self, name: &str) -> Result<T, NodeError> {
        let value = self
            .parameters
            .get(name)
            .ok_or_else(|| NodeError::MissingParameter(name.to_string()))?;
        serde_json::from_value(value.clone()).map_err(|e| NodeError::InvalidParameter {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Read an optional parameter. Absent values are `None`; present values
    /// that fail to deserialize are still errors.
    pub fn optional_parameter<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, NodeError> {
        match self.parameters.get(name) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                NodeError::InvalidParameter {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }

    /// Read a parameter without type conversion.
    pub fn raw_parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Read a credential field.
    pub fn credential(&self, name: &str) -> Option<&Value> {
        self.credentials.get(name)
    }

    /// All resolved credential fields.
    pub fn credentials(&self) -> &Map<String, Value> {
        &self.credentials
    }
}

/// Context for webhook lifecycle calls: an [`ExecutionContext`] plus the
/// callback URL the host will receive pushes on and the node's static data.
#[derive(Clone)]
pub struct HookContext {
    context: ExecutionContext,
    webhook_url: String,
    static_data: Arc<dyn StaticDataStore>,
}

impl HookContext {
    pub fn new(
        context: ExecutionContext,
        webhook_url: impl Into<String>,
        static_data: Arc<dyn StaticDataStore>,
    ) -> Self {
        Self {
            context,
            webhook_url: webhook_url.into(),
            static_data,
        }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// The URL the remote backend should push events to.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn static_data(&self) -> Arc<dyn StaticDataStore> {
        Arc::clone(&self.static_data)
    }
}
