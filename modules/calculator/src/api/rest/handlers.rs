use std::sync::Arc;

use api_gateway::Problem;
use axum::{Json, extract::Extension};

use crate::domain::{DomainError, Operation, Service};

use super::dto::{CalculationRequest, CalculationResponse, ErrorResponse};
use super::error::ApiError;
use super::extract::ValidatedCalculation;

/// Perform an arithmetic operation on two numbers.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    operation_id = "calculate",
    request_body(content = CalculationRequest, description = "Operation and its two operands"),
    responses(
        (status = 200, description = "Result of the operation", body = CalculationResponse),
        (status = 400, description = "Division by zero", body = ErrorResponse),
        (status = 422, description = "Request body failed validation", body = Problem,
            content_type = "application/problem+json"),
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    ValidatedCalculation(req): ValidatedCalculation,
) -> Result<Json<CalculationResponse>, ApiError> {
    let operation = Operation::from(req.operation);
    let (a, b) = (req.a, req.b);

    let result = svc
        .calculate(operation, a, b)
        .inspect_err(|e| match e {
            DomainError::DivisionByZero => tracing::warn!(a, b, "Division by zero attempted"),
        })?;

    tracing::info!(%operation, a, b, result, "Calculation succeeded");

    Ok(Json(CalculationResponse {
        operation: operation.to_string(),
        a,
        b,
        result,
    }))
}
