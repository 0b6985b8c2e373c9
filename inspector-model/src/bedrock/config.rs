//! Configuration for the Amazon Bedrock gateway.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Amazon Bedrock gateway.
///
/// Bedrock uses AWS IAM/STS authentication rather than API keys. Credentials
/// are loaded from the environment via the AWS SDK (environment variables,
/// shared config, IMDS, etc.).
///
/// The read timeout and attempt bound are applied at the SDK transport layer;
/// the relay adds no retry policy of its own on top.
///
/// # Example
///
/// ```rust,ignore
/// use inspector_model::bedrock::BedrockConfig;
///
/// // Default: us-west-2, Claude 3.5 Sonnet
/// let config = BedrockConfig::default();
///
/// // Custom region and model
/// let config = BedrockConfig::new("us-east-1", "us.meta.llama3-2-90b-instruct-v1:0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    /// AWS region for the Bedrock endpoint (e.g., `"us-west-2"`).
    pub region: String,
    /// Bedrock model identifier.
    pub model_id: String,
    /// Optional custom endpoint URL (e.g., a VPC endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// SDK read timeout. Generous: a streamed classification can take a while.
    pub read_timeout: Duration,
    /// Total attempt bound for transient transport failures (1 initial + retries).
    pub max_attempts: u32,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-west-2".to_string(),
            model_id: "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string(),
            endpoint_url: None,
            read_timeout: Duration::from_secs(1000),
            max_attempts: 5,
        }
    }
}

impl BedrockConfig {
    /// Create a new Bedrock config with the given region and model ID.
    pub fn new(region: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self { region: region.into(), model_id: model_id.into(), ..Default::default() }
    }

    /// Set a custom endpoint URL (e.g., a VPC endpoint).
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let config = BedrockConfig::default();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.model_id, "anthropic.claude-3-5-sonnet-20240620-v1:0");
        assert_eq!(config.read_timeout, Duration::from_secs(1000));
        assert_eq!(config.max_attempts, 5);
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = BedrockConfig::new("us-east-1", "test-model")
            .with_endpoint_url("https://vpce.example.com")
            .with_read_timeout(Duration::from_secs(30))
            .with_max_attempts(1);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.model_id, "test-model");
        assert_eq!(config.endpoint_url.as_deref(), Some("https://vpce.example.com"));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.max_attempts, 1);
    }
}
