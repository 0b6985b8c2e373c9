//! # inspector-model
//!
//! Inference gateway implementations for the Windshield Inspector.
//!
//! ## Overview
//!
//! - [`BedrockGateway`] - Amazon Bedrock via the streaming Converse API
//! - [`MockGateway`] - scripted gateway for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inspector_model::bedrock::{BedrockConfig, BedrockGateway};
//!
//! # async fn build() -> inspector_core::Result<()> {
//! let gateway = BedrockGateway::new(BedrockConfig::default()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The SDK-level read timeout and transient-failure attempt bound come from
//! [`BedrockConfig`]; no additional retry policy is layered on top.

pub mod bedrock;
pub mod mock;

pub use bedrock::{BedrockConfig, BedrockGateway};
pub use mock::MockGateway;
