//! Calculator Module
//!
//! Four-function arithmetic exposed over REST.
//!
//! ## Architecture
//!
//! - `domain` holds the arithmetic primitives and the `Service` dispatching to them
//! - `api::rest` validates requests, calls the `Service` and shapes responses
//! - [`Calculator`] plugs the routes into the `api_gateway`

// === MODULE DEFINITION ===
mod module;
pub use module::Calculator;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{DomainError, Operation, Service};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
