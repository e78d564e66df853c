//! # Trendswell Integration
//!
//! Package manifest for the Trendswell workflow-host integration. Bundles
//! the `trendswellApi` credential type, the Trendswell search node, and the
//! Trendswell trigger node, and exposes the [`Extension`] entry point a host
//! uses to register all of them.
//!
//! [`Extension`]: trendswell_protocols::extension::Extension

pub use trendswell_protocols as protocols;

pub use trendswell_nodes::{
    TrendswellApi, TrendswellClient, TrendswellExtension, TrendswellNode, TrendswellTrigger,
};

/// Schema version of this package as understood by the host.
pub const PACKAGE_VERSION: u32 = 1;

/// Create the extension that registers the credential type and both nodes.
pub fn extension() -> TrendswellExtension {
    TrendswellExtension::new()
}
