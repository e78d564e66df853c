//! Node declaration types and the action-node trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::ExecutionContext;
use crate::error::NodeError;
use crate::execution::ExecutionData;

/// Which palette group a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Transform,
    Trigger,
}

/// Connection kind for node inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Main,
}

/// How a property is edited and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Free-form text.
    Text,
    /// Text masked in the host UI.
    Secret,
    /// One value out of a fixed list.
    Options,
}

/// One selectable value for an options property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
}

impl PropertyOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A user-configurable field on a node or credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeProperty {
    pub name: String,
    pub display_name: String,
    pub kind: PropertyKind,
    pub default: Value,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
}

impl NodeProperty {
    fn new(name: impl Into<String>, display_name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            kind,
            default: Value::String(String::new()),
            required: false,
            description: None,
            placeholder: None,
            options: Vec::new(),
        }
    }

    /// Create a text property.
    pub fn text(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(name, display_name, PropertyKind::Text)
    }

    /// Create a masked text property.
    pub fn secret(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(name, display_name, PropertyKind::Secret)
    }

    /// Create an options property.
    pub fn options(
        name: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<PropertyOption>,
    ) -> Self {
        let mut property = Self::new(name, display_name, PropertyKind::Options);
        property.options = options;
        property
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A credential type a node requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

impl CredentialRequirement {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

/// Declaration of a workflow node as presented to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Unique identifier for the node type.
    pub name: String,

    /// Human-readable name.
    pub display_name: String,

    /// Description of what the node does.
    pub description: String,

    pub group: NodeGroup,

    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    pub inputs: Vec<ConnectionKind>,

    pub outputs: Vec<ConnectionKind>,

    #[serde(default)]
    pub properties: Vec<NodeProperty>,

    #[serde(default)]
    pub credentials: Vec<CredentialRequirement>,
}

impl NodeDescription {
    /// Create a new node description with one main input and output.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
            group: NodeGroup::Transform,
            version: 1,
            icon: None,
            inputs: vec![ConnectionKind::Main],
            outputs: vec![ConnectionKind::Main],
            properties: Vec::new(),
            credentials: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: NodeGroup) -> Self {
        self.group = group;
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<ConnectionKind>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<ConnectionKind>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_property(mut self, property: NodeProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_credential(mut self, credential: CredentialRequirement) -> Self {
        self.credentials.push(credential);
        self
    }

    /// Look up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A request/response workflow node.
///
/// One invocation reads its configured parameters, performs at most one
/// remote call, and returns the records for the node's single output.
#[async_trait]
pub trait ActionNode: Send + Sync {
    /// Returns the node declaration.
    fn description(&self) -> &NodeDescription;

    /// Execute the node once.
    async fn execute(&self, ctx: &ExecutionContext) -> Result<Vec<ExecutionData>, NodeError>;
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
