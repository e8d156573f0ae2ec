//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    // POST /calculate - Apply an operation to two operands
    let calculator = Router::new()
        .route("/calculate", post(handlers::calculate))
        .layer(Extension(service));

    router.merge(calculator)
}
