use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness indicator returned by `/health`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: &'static str,
}

/// Report that the service is up.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    operation_id = "health_check",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
