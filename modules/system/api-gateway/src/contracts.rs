use axum::Router;
use utoipa::openapi::OpenApi;

/// Implemented by every module that exposes REST endpoints through the gateway.
pub trait RestApiCapability: Send + Sync {
    /// Module name, used in logs.
    fn name(&self) -> &'static str;

    /// Add the module's routes to `router`.
    ///
    /// # Errors
    /// Returns an error if the module cannot build its routes.
    fn register_rest(&self, router: Router) -> anyhow::Result<Router>;

    /// `OpenAPI` fragment describing the module's operations and schemas.
    fn openapi(&self) -> OpenApi;
}
