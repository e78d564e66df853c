//! Inbound event normalization.

use serde_json::Value;

use trendswell_protocols::execution::ExecutionData;

/// Normalize one inbound delivery into output records.
///
/// The backend pushes either `{ "data": [...] }` or a bare payload. A `data`
/// attribute is unwrapped; arrays yield one record per element in order;
/// everything else yields exactly one record. Never fails, whatever the
/// payload shape.
pub fn into_execution_data(body: Value) -> Vec<ExecutionData> {
    match unwrap_data(body) {
        Value::Array(items) => items.into_iter().map(ExecutionData::from).collect(),
        single => vec![ExecutionData::from(single)],
    }
}

fn unwrap_data(body: Value) -> Value {
    match body.get("data") {
        Some(data) if !data.is_null() => data.clone(),
        _ => body,
    }
}
