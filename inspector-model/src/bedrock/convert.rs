//! Type conversions between relay types and the Bedrock Converse API.
//!
//! This module maps a [`ClassificationRequest`] onto the Converse message
//! format used by `aws-sdk-bedrockruntime`, and streaming delta events back
//! into [`Fragment`]s.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ContentBlockDelta, ConversationRole, ImageBlock, ImageFormat as BedrockImageFormat,
    ImageSource, InferenceConfiguration, Message,
};
use aws_smithy_types::Blob;
use inspector_core::{ClassificationRequest, Fragment, ImageFormat, InferenceConfig};

/// Result of converting a `ClassificationRequest` into Converse API inputs.
pub(crate) struct BedrockClassifyInput {
    /// The single user turn: image block followed by the prompt text block.
    pub messages: Vec<Message>,
    /// Sampling and length options.
    pub inference_config: Option<InferenceConfiguration>,
}

/// Convert a `ClassificationRequest` into Converse API inputs.
///
/// The request becomes exactly one user message containing the image (tagged
/// with its format) and the prompt text, in that order.
pub(crate) fn classification_request_to_bedrock(
    request: &ClassificationRequest,
) -> Result<BedrockClassifyInput, String> {
    let image = ImageBlock::builder()
        .format(image_format_to_bedrock(request.image.format))
        .source(ImageSource::Bytes(Blob::new(request.image.data.clone())))
        .build()
        .map_err(|e| format!("Failed to build Bedrock image block: {e}"))?;

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Image(image))
        .content(ContentBlock::Text(request.prompt.clone()))
        .build()
        .map_err(|e| format!("Failed to build Bedrock message: {e}"))?;

    Ok(BedrockClassifyInput {
        messages: vec![message],
        inference_config: inference_config_to_bedrock(&request.config),
    })
}

/// Map an accepted format tag to the Bedrock image format.
pub(crate) fn image_format_to_bedrock(format: ImageFormat) -> BedrockImageFormat {
    match format {
        ImageFormat::Png => BedrockImageFormat::Png,
        ImageFormat::Jpeg => BedrockImageFormat::Jpeg,
        ImageFormat::Webp => BedrockImageFormat::Webp,
    }
}

/// Convert `InferenceConfig` to a Bedrock `InferenceConfiguration`.
///
/// Returns `None` when no option is set so the endpoint's own defaults apply.
fn inference_config_to_bedrock(config: &InferenceConfig) -> Option<InferenceConfiguration> {
    if config.max_output_tokens.is_none() && config.temperature.is_none() && config.top_p.is_none()
    {
        return None;
    }

    let mut builder = InferenceConfiguration::builder();
    if let Some(max_tokens) = config.max_output_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = config.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(top_p) = config.top_p {
        builder = builder.top_p(top_p);
    }

    Some(builder.build())
}

/// Convert a streaming `ContentBlockDelta` event to a [`Fragment`].
///
/// Only text deltas carry generated output; every other delta kind (and the
/// empty delta) is skipped.
pub(crate) fn delta_to_fragment(delta: &ContentBlockDelta) -> Option<Fragment> {
    match delta {
        ContentBlockDelta::Text(text) if !text.is_empty() => Some(Fragment::new(text.clone())),
        _ => None,
    }
}
