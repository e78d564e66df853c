//! Trendswell automated-search node.

use async_trait::async_trait;
use serde_json::Value;

use trendswell_protocols::context::ExecutionContext;
use trendswell_protocols::error::NodeError;
use trendswell_protocols::execution::ExecutionData;
use trendswell_protocols::node::{
    ActionNode, CredentialRequirement, NodeDescription, NodeProperty, PropertyOption,
};

use crate::client::{SearchRequest, TrendswellClient, DEFAULT_BASE_URL};

/// Action node running one automated search per invocation.
pub struct TrendswellNode {
    description: NodeDescription,
    base_url: String,
}

impl TrendswellNode {
    pub fn new() -> Self {
        Self {
            description: build_description(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the node at a different backend origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for TrendswellNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionNode for TrendswellNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    async fn execute(&self, ctx: &ExecutionContext) -> Result<Vec<ExecutionData>, NodeError> {
        let search_text: String = ctx.parameter("searchText")?;
        let ai_strength: String = ctx.parameter("aiStrength")?;
        let country_code: String = ctx.parameter("countryCode")?;
        let example1: String = ctx.optional_parameter("example1")?.unwrap_or_default();
        let example2: String = ctx.optional_parameter("example2")?.unwrap_or_default();
        let example3: String = ctx.optional_parameter("example3")?.unwrap_or_default();
        let niche1: String = ctx.optional_parameter("niche1")?.unwrap_or_default();
        let niche2: String = ctx.optional_parameter("niche2")?.unwrap_or_default();

        let auth_token = ctx
            .credential("authToken")
            .and_then(Value::as_str)
            .ok_or_else(|| NodeError::MissingCredential("authToken".to_string()))?;

        let request = SearchRequest {
            search_text,
            ai_strength,
            country_code,
            examples: non_empty(vec![example1, example2, example3]),
            niches: non_empty(vec![niche1, niche2]),
        };

        let client =
            TrendswellClient::new(ctx.transport(), auth_token).with_base_url(self.base_url.as_str());
        let response = client.automated_search(&request).await?;

        Ok(vec![ExecutionData::from(response)])
    }
}

fn non_empty(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

fn build_description() -> NodeDescription {
    NodeDescription::new("trendswell", "Trendswell", "Custom node for Trendswell search")
        .with_icon("file:icons/trendswell.png")
        .with_property(
            NodeProperty::text("searchText", "Search Text")
                .required()
                .with_placeholder("Enter keyword or question")
                .with_description("Enter keyword or question"),
        )
        .with_property(
            NodeProperty::options(
                "aiStrength",
                "AI Strength",
                vec![
                    PropertyOption::new("Basic", "Basic"),
                    PropertyOption::new("Premium", "Premium"),
                ],
            )
            .required()
            .with_default("Basic")
            .with_description("Select AI Strength"),
        )
        .with_property(
            NodeProperty::options("countryCode", "Country", country_options())
                .required()
                .with_default("US")
                .with_description("Select the country"),
        )
        .with_property(NodeProperty::text("example1", "Example 1"))
        .with_property(NodeProperty::text("example2", "Example 2"))
        .with_property(NodeProperty::text("example3", "Example 3"))
        .with_property(NodeProperty::text("niche1", "Niche 1"))
        .with_property(NodeProperty::text("niche2", "Niche 2"))
        .with_credential(CredentialRequirement::required("trendswellApi"))
}

fn country_options() -> Vec<PropertyOption> {
    [
        ("Australia", "AU"),
        ("Myanmar (Burma)", "MM"),
        ("Cambodia", "KH"),
        ("Canada", "CA"),
        ("Sri Lanka", "LK"),
        ("Cyprus", "CY"),
        ("Ghana", "GH"),
        ("Greece", "GR"),
        ("Hong Kong", "HK"),
        ("India", "IN"),
        ("Indonesia", "ID"),
        ("Ireland", "IE"),
        ("Kenya", "KE"),
        ("Malaysia", "MY"),
        ("Malta", "MT"),
        ("New Zealand", "NZ"),
        ("Nigeria", "NG"),
        ("Pakistan", "PK"),
        ("Philippines", "PH"),
        ("Singapore", "SG"),
        ("Vietnam", "VN"),
        ("South Africa", "ZA"),
        ("United Arab Emirates", "AE"),
        ("Egypt", "EG"),
        ("United Kingdom", "GB"),
        ("United States", "US"),
    ]
    .into_iter()
    .map(|(name, value)| PropertyOption::new(name, value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use trendswell_protocols::node::{ConnectionKind, NodeGroup, PropertyKind};
    use trendswell_protocols::transport::HttpMethod;

    use crate::testing::FakeTransport;

    fn context(transport: Arc<FakeTransport>) -> ExecutionContext {
        ExecutionContext::new(transport)
            .with_parameter("searchText", "ai tools")
            .with_parameter("aiStrength", "Basic")
            .with_parameter("countryCode", "US")
            .with_credential("authToken", "secret")
    }

    #[test]
    fn test_description_shape() {
        let node = TrendswellNode::new();
        let description = node.description();
        assert_eq!(description.name, "trendswell");
        assert_eq!(description.group, NodeGroup::Transform);
        assert_eq!(description.inputs, vec![ConnectionKind::Main]);
        assert_eq!(description.outputs, vec![ConnectionKind::Main]);
        assert_eq!(description.credentials[0].name, "trendswellApi");
    }

    #[test]
    fn test_description_country_list() {
        let node = TrendswellNode::new();
        let country = node.description().property("countryCode").unwrap();
        assert_eq!(country.kind, PropertyKind::Options);
        assert_eq!(country.options.len(), 26);
        assert_eq!(country.default, json!("US"));
        assert!(country.options.iter().any(|o| o.value == "GB"));
    }

    #[test]
    fn test_description_ai_strength_options() {
        let node = TrendswellNode::new();
        let strength = node.description().property("aiStrength").unwrap();
        assert_eq!(strength.options.len(), 2);
        assert_eq!(strength.default, json!("Basic"));
    }

    #[test]
    fn test_non_empty_filters_and_preserves_order() {
        let values = non_empty(vec![
            "a".to_string(),
            String::new(),
            "c".to_string(),
        ]);
        assert_eq!(values, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_search_request_body_shape() {
        let request = SearchRequest {
            search_text: "ai tools".to_string(),
            ai_strength: "Basic".to_string(),
            country_code: "US".to_string(),
            examples: vec!["a".to_string(), "c".to_string()],
            niches: vec!["n2".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "searchText": "ai tools",
                "aiStrength": "Basic",
                "countryCode": "US",
                "examples": ["a", "c"],
                "niches": ["n2"],
            })
        );
    }

    #[tokio::test]
    async fn test_execute_posts_filtered_body() {
        let transport = Arc::new(FakeTransport::new().respond_with(200, json!({"results": []})));
        let ctx = context(transport.clone())
            .with_parameter("example1", "a")
            .with_parameter("example2", "")
            .with_parameter("example3", "c")
            .with_parameter("niche1", "")
            .with_parameter("niche2", "n2");

        let records = TrendswellNode::new().execute(&ctx).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].json, json!({"results": []}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert!(requests[0].url.ends_with("/n8n/automated-search"));
        assert_eq!(requests[0].header("auth-token"), Some("secret"));
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));

        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["examples"], json!(["a", "c"]));
        assert_eq!(body["niches"], json!(["n2"]));
    }

    #[tokio::test]
    async fn test_execute_omitted_optional_fields_yield_empty_lists() {
        let transport = Arc::new(FakeTransport::new().respond_with(200, json!({})));
        let ctx = context(transport.clone());

        TrendswellNode::new().execute(&ctx).await.unwrap();

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["examples"], json!([]));
        assert_eq!(body["niches"], json!([]));
    }

    #[tokio::test]
    async fn test_execute_missing_required_parameter() {
        let transport = Arc::new(FakeTransport::new());
        let ctx = ExecutionContext::new(transport.clone()).with_credential("authToken", "secret");

        let result = TrendswellNode::new().execute(&ctx).await;

        assert!(matches!(result, Err(NodeError::MissingParameter(_))));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_missing_credential() {
        let transport = Arc::new(FakeTransport::new());
        let ctx = ExecutionContext::new(transport.clone())
            .with_parameter("searchText", "ai tools")
            .with_parameter("aiStrength", "Basic")
            .with_parameter("countryCode", "US");

        let result = TrendswellNode::new().execute(&ctx).await;

        assert!(matches!(result, Err(NodeError::MissingCredential(name)) if name == "authToken"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_propagates_api_failure() {
        let transport = Arc::new(FakeTransport::new().respond_with(502, json!("bad gateway")));
        let ctx = context(transport);

        let result = TrendswellNode::new().execute(&ctx).await;

        assert!(matches!(result, Err(NodeError::Api(_))));
    }
}
