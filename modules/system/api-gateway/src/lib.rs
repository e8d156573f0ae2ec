//! API Gateway Module
//!
//! Owns the HTTP server: assembles the router from registered REST modules,
//! serves the health probe, applies the middleware stack and emits a single
//! `OpenAPI` document for every registered operation.
//!
//! ## Architecture
//!
//! - Modules implement [`RestApiCapability`] and are registered on [`ApiGateway`]
//! - [`ApiGateway::build_router`] merges their routes under the shared middleware
//! - [`ApiGateway::serve`] runs the router until the cancellation token fires

pub mod config;
pub mod contracts;
pub mod middleware;
mod module;
pub mod problem;
pub mod web;

pub use config::{ApiGatewayConfig, OpenApiConfig};
pub use contracts::RestApiCapability;
pub use module::ApiGateway;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ValidationViolation};
