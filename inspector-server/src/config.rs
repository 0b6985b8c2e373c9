use inspector_core::{InferenceConfig, InferenceGateway, MAX_UPLOAD_BYTES};
use std::{sync::Arc, time::Duration};

/// Security configuration for the inspector server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: the 10 MB upload cap)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: MAX_UPLOAD_BYTES,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl SecurityConfig {
    /// Create a production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Self::default() }
    }
}

/// Configuration for the inspector server.
#[derive(Clone)]
pub struct ServerConfig {
    /// The process-wide gateway shared across uploads.
    pub gateway: Arc<dyn InferenceGateway>,
    /// Inference options attached to every classification request.
    pub inference: InferenceConfig,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(gateway: Arc<dyn InferenceGateway>) -> Self {
        Self {
            gateway,
            inference: InferenceConfig::classification_defaults(),
            security: SecurityConfig::default(),
        }
    }

    pub fn with_inference_config(mut self, inference: InferenceConfig) -> Self {
        self.inference = inference;
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }
}
