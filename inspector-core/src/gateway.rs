use crate::{Result, image::UploadedImage, prompt::CLASSIFICATION_PROMPT};
use async_trait::async_trait;
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// A lazy, finite, single-pass sequence of response fragments.
///
/// Fragments arrive in generation order and the sequence terminates when the
/// endpoint signals completion. A mid-stream failure is yielded in-band as an
/// `Err` item so fragments already emitted stay visible to the consumer.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<Fragment>> + Send>>;

/// One incremental piece of generated text. A fragment has no meaning on its
/// own; only the concatenation of all fragments received so far does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A remote multimodal inference endpoint that classifies one image.
///
/// Implementations translate a `ClassificationRequest` into a single
/// conversational turn (image block + prompt text), submit it for streaming,
/// and expose the response as a [`FragmentStream`]. No state is retained
/// between invocations.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// The model identifier requests are routed to. Surfaces in every
    /// user-visible failure message.
    fn model_id(&self) -> &str;

    async fn classify(&self, request: ClassificationRequest) -> Result<FragmentStream>;
}

/// Sampling and length options recognized by the inference endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    pub max_output_tokens: Option<i32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
}

impl InferenceConfig {
    /// The reference configuration used for windshield classification.
    pub fn classification_defaults() -> Self {
        Self { max_output_tokens: Some(2000), temperature: Some(1.0), top_p: Some(0.999) }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: i32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// One classification interaction: the fixed prompt plus one uploaded image.
/// Immutable once constructed; exactly one is in flight per upload event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub prompt: String,
    pub image: UploadedImage,
    pub config: InferenceConfig,
}

impl ClassificationRequest {
    /// Build a request for the given image with the standard prompt and the
    /// reference inference configuration.
    pub fn new(image: UploadedImage) -> Self {
        Self {
            prompt: CLASSIFICATION_PROMPT.to_string(),
            image,
            config: InferenceConfig::classification_defaults(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }
}
