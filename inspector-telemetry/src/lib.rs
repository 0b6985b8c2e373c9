//! # inspector-telemetry
//!
//! Structured logging for the Windshield Inspector, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use inspector_telemetry::{info, init_telemetry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("my-service")?;
//!     info!("service started");
//!     Ok(())
//! }
//! ```

pub mod init;

// Re-export tracing macros for convenience
pub use tracing::{Span, debug, error, info, instrument, trace, warn};

pub use init::init_telemetry;
