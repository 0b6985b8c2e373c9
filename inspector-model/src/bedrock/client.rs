//! Amazon Bedrock gateway implementation.
//!
//! Uses the AWS SDK Converse API in streaming mode. Credentials are loaded
//! automatically from the environment via `aws-config` (environment variables,
//! shared config, IMDS, etc.).

use super::config::BedrockConfig;
use super::convert::{classification_request_to_bedrock, delta_to_fragment};
use async_stream::try_stream;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::ConverseStreamOutput;
use aws_smithy_types::error::display::DisplayErrorContext;
use inspector_core::{
    ClassificationRequest, FragmentStream, InferenceGateway, InspectorError, Result,
};
use tracing::{debug, info, instrument};

/// Amazon Bedrock gateway backed by the AWS SDK Converse API.
///
/// Constructed once at startup and shared across requests; the remote
/// connection is stateless per call, so no teardown is required. The read
/// timeout and transient-failure attempt bound from [`BedrockConfig`] are
/// installed on the SDK itself.
///
/// # Example
///
/// ```rust,ignore
/// use inspector_model::bedrock::{BedrockConfig, BedrockGateway};
///
/// let gateway = BedrockGateway::new(BedrockConfig::default()).await?;
/// let fragments = gateway.classify(request).await?;
/// ```
pub struct BedrockGateway {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
    region: String,
}

impl BedrockGateway {
    /// Create a new Bedrock gateway from the given configuration.
    ///
    /// Loads AWS credentials from the standard credential chain and installs
    /// the configured read timeout and retry bound on the SDK client.
    pub async fn new(config: BedrockConfig) -> Result<Self> {
        let region = config.region.clone();
        let model_id = config.model_id.clone();

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .retry_config(
                aws_config::retry::RetryConfig::standard().with_max_attempts(config.max_attempts),
            )
            .timeout_config(
                aws_config::timeout::TimeoutConfig::builder()
                    .read_timeout(config.read_timeout)
                    .build(),
            );

        if let Some(endpoint_url) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint_url);
        }

        let sdk_config = sdk_config_loader.load().await;
        let client = aws_sdk_bedrockruntime::Client::new(&sdk_config);

        info!("bedrock gateway created for region={region}, model={model_id}");

        Ok(Self { client, model_id, region })
    }
}

#[async_trait]
impl InferenceGateway for BedrockGateway {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    #[instrument(skip_all, fields(model_id = %self.model_id, region = %self.region))]
    async fn classify(&self, request: ClassificationRequest) -> Result<FragmentStream> {
        let input = classification_request_to_bedrock(&request).map_err(|cause| {
            InspectorError::Inference { model_id: self.model_id.clone(), cause }
        })?;

        debug!("bedrock streaming converse for model={}", self.model_id);

        let mut stream_output = self
            .client
            .converse_stream()
            .model_id(&self.model_id)
            .set_messages(Some(input.messages))
            .set_inference_config(input.inference_config)
            .send()
            .await
            .map_err(|e| InspectorError::Inference {
                model_id: self.model_id.clone(),
                cause: format!("{}", DisplayErrorContext(e)),
            })?;

        let model_id = self.model_id.clone();

        let fragment_stream = try_stream! {
            while let Some(event) = stream_output.stream.recv().await.map_err(|e| {
                InspectorError::StreamInterrupted { cause: format!("{}", DisplayErrorContext(e)) }
            })? {
                match event {
                    ConverseStreamOutput::ContentBlockDelta(delta_event) => {
                        if let Some(delta) = &delta_event.delta {
                            if let Some(fragment) = delta_to_fragment(delta) {
                                yield fragment;
                            }
                        }
                    }
                    ConverseStreamOutput::MessageStop(stop_event) => {
                        debug!(
                            stop_reason = ?stop_event.stop_reason,
                            "bedrock stream complete for model={model_id}"
                        );
                    }
                    _ => {
                        // MessageStart, ContentBlockStart/Stop, Metadata — no text to emit.
                    }
                }
            }
        };

        Ok(Box::pin(fragment_stream))
    }
}
