//! Amazon Bedrock gateway for the Windshield Inspector.
//!
//! Calls the Converse API in streaming mode with IAM/STS authentication.
//!
//! # Authentication
//!
//! Credentials are loaded from the standard AWS credential chain (environment
//! variables, `~/.aws/credentials`, IMDS, etc.). No API key is needed. The
//! caller's identity needs `bedrock:InvokeModelWithResponseStream` on the
//! configured model.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use inspector_model::bedrock::{BedrockConfig, BedrockGateway};
//!
//! let config = BedrockConfig::new("us-west-2", "anthropic.claude-3-5-sonnet-20240620-v1:0");
//! let gateway = BedrockGateway::new(config).await?;
//! ```

mod client;
mod config;
pub(crate) mod convert;

pub use client::BedrockGateway;
pub use config::BedrockConfig;
