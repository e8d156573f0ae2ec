use serde::{Deserialize, Serialize};

/// 1 MiB; calculation bodies are a few dozen bytes.
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ApiGatewayConfig {
    /// Maximum accepted request body size; larger bodies get 413.
    pub body_limit_bytes: usize,
    /// Per-request timeout in seconds; slower requests get 504.
    pub request_timeout_secs: u64,
    pub openapi: OpenApiConfig,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            openapi: OpenApiConfig::default(),
        }
    }
}

/// `OpenAPI` document metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            title: "Calculator API".to_owned(),
            version: "1.0.0".to_owned(),
            description: Some("A REST API for basic arithmetic operations.".to_owned()),
        }
    }
}
