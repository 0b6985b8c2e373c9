//! Streaming response rendering.
//!
//! The renderer commits to publishing each fragment before requesting the
//! next: for every fragment received it appends the text to an accumulator and
//! republishes the accumulator's full content, so the consumer perceives
//! progressive generation rather than a batched answer.

use crate::{FragmentStream, Result};
use futures::StreamExt;

/// Somewhere the growing answer can be made visible: an SSE channel, a
/// terminal, a test buffer.
///
/// `publish` receives the full accumulated text, not the delta. Returning an
/// error signals the surface is gone (e.g. the viewer disconnected) and aborts
/// the render.
pub trait DisplaySurface: Send {
    fn publish(&mut self, text: &str) -> Result<()>;
}

/// Consumes a fragment stream and makes the growing answer visible
/// incrementally.
///
/// No retry or recovery logic lives here; failures surfaced by the gateway
/// propagate to the caller unchanged, and whatever text accumulated before the
/// failure remains available via [`StreamRenderer::text`].
pub struct StreamRenderer<S> {
    surface: S,
    text: String,
}

impl<S: DisplaySurface> StreamRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, text: String::new() }
    }

    /// Render the stream to completion, publishing after every fragment.
    ///
    /// Single-pass: the stream is consumed in arrival order and cannot be
    /// restarted.
    pub async fn render(&mut self, mut fragments: FragmentStream) -> Result<()> {
        while let Some(next) = fragments.next().await {
            let fragment = next?;
            self.text.push_str(&fragment.text);
            self.surface.publish(&self.text)?;
        }
        Ok(())
    }

    /// The text accumulated so far. After a successful [`render`](Self::render)
    /// this is the complete answer.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// A surface that records every published snapshot. Used by tests and the
/// console path.
#[derive(Debug, Default)]
pub struct CollectingSurface {
    pub snapshots: Vec<String>,
}

impl CollectingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for CollectingSurface {
    fn publish(&mut self, text: &str) -> Result<()> {
        self.snapshots.push(text.to_string());
        Ok(())
    }
}
