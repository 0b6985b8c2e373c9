use crate::{ServerConfig, orchestrator};
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use inspector_core::{
    ClassificationRequest, ImageFormat, InspectorError, Result, UploadedImage,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tokio::sync::mpsc;
use tokio_stream::{StreamExt, wrappers::UnboundedReceiverStream};

#[derive(Clone)]
pub struct ClassifyController {
    config: ServerConfig,
}

impl ClassifyController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Accept one uploaded image and stream the classification back as SSE.
///
/// Format validation happens here, before the gateway is ever invoked: an
/// upload off the allow-list is answered with 400 and no request is sent.
/// Gateway failures arrive in-band as `error` events so the page can keep any
/// text already rendered.
pub async fn classify_upload(
    State(controller): State<ClassifyController>,
    mut multipart: Multipart,
) -> std::result::Result<
    Sse<impl Stream<Item = std::result::Result<Event, Infallible>>>,
    (StatusCode, Json<ErrorBody>),
> {
    let image = extract_image(&mut multipart)
        .await
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(ErrorBody { error: err.to_string() })))?;

    let request =
        ClassificationRequest::new(image).with_config(controller.config.inference.clone());

    let (events, rx) = mpsc::unbounded_channel();
    tokio::spawn(orchestrator::classify_image(
        controller.config.gateway.clone(),
        request,
        events,
    ));

    let sse_stream = UnboundedReceiverStream::new(rx).filter_map(|event| {
        let json = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Ok(Sse::new(sse_stream).keep_alive(KeepAlive::default()))
}

/// Pull the `image` field out of the multipart upload and resolve its format
/// against the allow-list: declared content-type first, file extension second.
async fn extract_image(multipart: &mut Multipart) -> Result<UploadedImage> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| InspectorError::InputFormat(format!("malformed upload: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| InspectorError::InputFormat(format!("could not read upload: {e}")))?;

        let format = content_type
            .as_deref()
            .and_then(ImageFormat::from_mime_type)
            .or_else(|| file_name.as_deref().and_then(ImageFormat::from_file_name))
            .ok_or_else(|| {
                InspectorError::InputFormat(format!(
                    "'{}' is not an accepted image; accepted formats: {}",
                    file_name.as_deref().unwrap_or("upload"),
                    ImageFormat::accepted_list()
                ))
            })?;

        return Ok(UploadedImage::new(format, data.to_vec()));
    }

    Err(InspectorError::InputFormat(format!(
        "no image field in upload; accepted formats: {}",
        ImageFormat::accepted_list()
    )))
}
