//! Execution output types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One output record handed to the host's execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionData {
    /// The record payload.
    pub json: Value,
}

impl ExecutionData {
    pub fn new(json: Value) -> Self {
        Self { json }
    }
}

impl From<Value> for ExecutionData {
    fn from(json: Value) -> Self {
        Self::new(json)
    }
}
