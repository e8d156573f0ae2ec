//! Calculator module definition

use std::sync::Arc;

use anyhow::Result;
use api_gateway::RestApiCapability;
use axum::Router;
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers, routes};
use crate::domain::Service;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::calculate),
    components(schemas(
        dto::OperationDto,
        dto::CalculationRequest,
        dto::CalculationResponse,
        dto::ErrorResponse
    )),
    tags((name = "calculator", description = "Arithmetic operations"))
)]
struct CalculatorApiDoc;

/// Calculator module.
///
/// Exposes `POST /calculate` backed by the domain [`Service`].
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    service: Arc<Service>,
}

impl Calculator {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl RestApiCapability for Calculator {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn register_rest(&self, router: Router) -> Result<Router> {
        tracing::info!("Registering calculator REST routes");
        Ok(routes::register_routes(router, Arc::clone(&self.service)))
    }

    fn openapi(&self) -> utoipa::openapi::OpenApi {
        CalculatorApiDoc::openapi()
    }
}
