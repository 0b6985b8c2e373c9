//! # inspector-server
//!
//! HTTP surface for the Windshield Inspector: the upload orchestrator, the
//! SSE relay of streamed classifications, and the embedded single-page UI.
//!
//! One upload maps to one gateway invocation; the page receives the growing
//! answer as `update` events and either a `complete` or an `error` event.
//! Every failure is converted to a user-visible message at this boundary —
//! nothing crashes the process and nothing is silently swallowed.

pub mod config;
pub mod orchestrator;
pub mod rest;
pub mod web_ui;

pub use config::{SecurityConfig, ServerConfig};
pub use orchestrator::ClassifyEvent;
pub use rest::{ClassifyController, create_app};
