//! Per-upload classification orchestration.
//!
//! Binds one uploaded image to one gateway invocation and relays render
//! events to the viewer over a per-upload channel. Each upload runs through
//! the phase machine `Idle → AwaitingResponse → (Streaming → Complete) | Failed`;
//! a new upload starts a fresh machine, there is no automatic retry
//! transition.

use inspector_core::{
    ClassificationRequest, DisplaySurface, InferenceGateway, InspectorError, Result,
    StreamRenderer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One render event pushed to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifyEvent {
    /// The full text accumulated so far; one per fragment received.
    Update { text: String },
    /// The final answer; the stream ends after this.
    Complete { text: String },
    /// A user-visible failure message. Text already delivered via `Update`
    /// stays on screen; this is appended as an indicator.
    Error { message: String },
}

/// Lifecycle of a single upload event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
    Streaming,
    Complete,
    Failed,
}

impl Phase {
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::AwaitingResponse)
                | (Phase::AwaitingResponse, Phase::Streaming)
                | (Phase::AwaitingResponse, Phase::Failed)
                | (Phase::Streaming, Phase::Complete)
                | (Phase::Streaming, Phase::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Complete | Phase::Failed)
    }
}

/// A display surface backed by the per-upload event channel.
///
/// Publishing fails once the receiver is gone (viewer disconnected or
/// superseded the upload), which aborts the render and drops the network
/// stream instead of pulling fragments nobody will see.
pub struct ChannelSurface {
    events: mpsc::UnboundedSender<ClassifyEvent>,
}

impl ChannelSurface {
    pub fn new(events: mpsc::UnboundedSender<ClassifyEvent>) -> Self {
        Self { events }
    }
}

impl DisplaySurface for ChannelSurface {
    fn publish(&mut self, text: &str) -> Result<()> {
        self.events
            .send(ClassifyEvent::Update { text: text.to_string() })
            .map_err(|_| InspectorError::Canceled)
    }
}

/// Run one classification: invoke the gateway, render the fragment stream to
/// the event channel, and convert any failure into a user-visible message.
///
/// Never panics and never lets an error escape; the hosting process stays
/// responsive for the next upload regardless of the outcome here.
pub async fn classify_image(
    gateway: Arc<dyn InferenceGateway>,
    request: ClassificationRequest,
    events: mpsc::UnboundedSender<ClassifyEvent>,
) {
    let upload_id = Uuid::new_v4();
    let mut phase = Phase::Idle;

    advance(&mut phase, Phase::AwaitingResponse, upload_id);
    info!(
        %upload_id,
        model_id = %gateway.model_id(),
        format = %request.image.format,
        bytes = request.image.len(),
        "classification started"
    );

    let fragments = match gateway.classify(request).await {
        Ok(fragments) => fragments,
        Err(err) => {
            advance(&mut phase, Phase::Failed, upload_id);
            warn!(%upload_id, error = %err, "classification request failed");
            let _ = events.send(ClassifyEvent::Error { message: user_message(&err) });
            return;
        }
    };

    advance(&mut phase, Phase::Streaming, upload_id);
    let mut renderer = StreamRenderer::new(ChannelSurface::new(events.clone()));
    match renderer.render(fragments).await {
        Ok(()) => {
            advance(&mut phase, Phase::Complete, upload_id);
            info!(%upload_id, chars = renderer.text().len(), "classification complete");
            let _ = events.send(ClassifyEvent::Complete { text: renderer.text().to_string() });
        }
        Err(InspectorError::Canceled) => {
            // Viewer went away; nothing to report and nobody to report it to.
            debug!(%upload_id, "viewer disconnected, classification abandoned");
        }
        Err(err) => {
            advance(&mut phase, Phase::Failed, upload_id);
            warn!(%upload_id, error = %err, "classification stream failed");
            let _ = events.send(ClassifyEvent::Error { message: user_message(&err) });
        }
    }
}

fn advance(phase: &mut Phase, next: Phase, upload_id: Uuid) {
    debug_assert!(phase.can_transition_to(next), "illegal phase transition {phase:?} -> {next:?}");
    debug!(%upload_id, from = ?phase, to = ?next, "phase transition");
    *phase = next;
}

/// Format a failure for the viewer. Gateway failures carry the model
/// identifier and the underlying cause.
fn user_message(err: &InspectorError) -> String {
    match err {
        InspectorError::Inference { model_id, cause } => {
            format!("ERROR: Can't invoke '{model_id}'. Reason: {cause}")
        }
        other => format!("ERROR: {other}"),
    }
}
