//! Trendswell extension definition.

use std::sync::Arc;

use async_trait::async_trait;

use trendswell_protocols::error::ExtensionError;
use trendswell_protocols::extension::{
    Extension, ExtensionContext, ExtensionManifest, Provides, Version,
};

use crate::credential::TrendswellApi;
use crate::search::TrendswellNode;
use crate::trigger::TrendswellTrigger;

/// Trendswell node-package extension.
pub struct TrendswellExtension {
    manifest: ExtensionManifest,
}

impl TrendswellExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new("trendswell", "Trendswell", Version::new(1, 0, 0))
            .with_description("Trendswell search node, trigger node, and API credential");
        manifest.provides = Provides {
            nodes: vec!["trendswell".to_string(), "trendswellTrigger".to_string()],
            credentials: vec!["trendswellApi".to_string()],
        };

        Self { manifest }
    }
}

impl Default for TrendswellExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for TrendswellExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        ctx.credentials
            .register_credential(Arc::new(TrendswellApi::new()))?;
        ctx.nodes.register_action(Arc::new(TrendswellNode::new()))?;
        ctx.nodes
            .register_webhook(Arc::new(TrendswellTrigger::new()))?;

        Ok(())
    }
}
