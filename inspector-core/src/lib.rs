//! # inspector-core
//!
//! Core types and traits for the Windshield Inspector classification relay.
//!
//! ## Overview
//!
//! This crate provides the provider-independent pieces of the relay:
//!
//! - [`InferenceGateway`] - the pluggable transport to a multimodal endpoint
//! - [`ClassificationRequest`] / [`Fragment`] - the request/response data model
//! - [`StreamRenderer`] / [`DisplaySurface`] - incremental response rendering
//! - [`CLASSIFICATION_PROMPT`] - the fixed few-shot instruction text
//! - [`InspectorError`] / [`Result`] - unified error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inspector_core::{ClassificationRequest, ImageFormat, UploadedImage};
//!
//! let image = UploadedImage::from_file_name("windshield.png", bytes)?;
//! let request = ClassificationRequest::new(image);
//! let fragments = gateway.classify(request).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod image;
pub mod prompt;
pub mod render;

pub use error::{InspectorError, Result};
pub use gateway::{
    ClassificationRequest, Fragment, FragmentStream, InferenceConfig, InferenceGateway,
};
pub use image::{ImageFormat, MAX_UPLOAD_BYTES, UploadedImage};
pub use prompt::CLASSIFICATION_PROMPT;
pub use render::{CollectingSurface, DisplaySurface, StreamRenderer};
