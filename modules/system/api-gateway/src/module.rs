//! API Gateway definition
//!
//! Contains the `ApiGateway` struct: module registry, router assembly,
//! middleware stack, `OpenAPI` emission and the HTTP serve loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get};
use http::StatusCode;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa::openapi::InfoBuilder;

use crate::config::ApiGatewayConfig;
use crate::contracts::RestApiCapability;
use crate::middleware::request_id;
use crate::problem::{Problem, ValidationViolation};
use crate::web;

#[derive(OpenApi)]
#[openapi(
    paths(web::health_check),
    components(schemas(web::HealthStatus, Problem, ValidationViolation)),
    tags((name = "health", description = "Service liveness"))
)]
struct GatewayApiDoc;

/// Owns the HTTP server and the set of REST modules it exposes.
pub struct ApiGateway {
    config: ApiGatewayConfig,
    modules: Vec<Arc<dyn RestApiCapability>>,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new(ApiGatewayConfig::default())
    }
}

impl ApiGateway {
    /// Create a new `ApiGateway` instance with the given configuration
    #[must_use]
    pub fn new(config: ApiGatewayConfig) -> Self {
        Self {
            config,
            modules: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    /// Register a REST module. A second module with the same name is ignored.
    pub fn register_module(&mut self, module: Arc<dyn RestApiCapability>) {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            tracing::error!(
                module = module.name(),
                "Duplicate module registration detected; ignoring subsequent registration"
            );
            return;
        }
        tracing::debug!(module = module.name(), "Registered REST module");
        self.modules.push(module);
    }

    /// Build the HTTP router: health probe, every module's routes, middleware.
    ///
    /// # Errors
    /// Returns an error if a module fails to register its routes.
    pub fn build_router(&self) -> Result<Router> {
        let mut router = Router::new().route("/health", get(web::health_check));

        for module in &self.modules {
            tracing::info!(module = module.name(), "Registering REST routes");
            router = module
                .register_rest(router)
                .with_context(|| format!("module '{}' failed to register routes", module.name()))?;
        }

        Ok(self.apply_middleware_stack(router))
    }

    /// Apply all middleware layers to a router.
    ///
    /// Requests flow from the outermost layer inwards:
    /// `SetRequestId` → `PropagateRequestId` → Trace → Timeout → `BodyLimit` → Router.
    fn apply_middleware_stack(&self, mut router: Router) -> Router {
        let limit = self.config.body_limit_bytes;

        // Body limit: reject by Content-Length up front, cap extractors for chunked bodies
        router = router.layer(DefaultBodyLimit::max(limit));
        router = router.layer(RequestBodyLimitLayer::new(limit));

        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(self.config.request_timeout_secs),
        ));

        router = Self::apply_trace_layer(router);

        router = router.layer(PropagateRequestIdLayer::new(request_id::header()));
        router.layer(SetRequestIdLayer::new(
            request_id::header(),
            MakeRequestUuid,
        ))
    }

    fn apply_trace_layer(router: Router) -> Router {
        use tracing::field::Empty;

        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    let rid = request_id::from_headers(req.headers());
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = rid.as_deref().unwrap_or("n/a"),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
    }

    /// Build the `OpenAPI` document covering the gateway and every module.
    #[must_use]
    pub fn build_openapi(&self) -> utoipa::openapi::OpenApi {
        let mut doc = GatewayApiDoc::openapi();
        for module in &self.modules {
            doc.merge(module.openapi());
        }

        let meta = &self.config.openapi;
        doc.info = InfoBuilder::new()
            .title(meta.title.clone())
            .version(meta.version.clone())
            .description(meta.description.clone())
            .build();
        doc
    }

    /// Bind the listening socket. Host names are resolved.
    ///
    /// # Errors
    /// Returns an error if the address cannot be resolved or bound.
    pub async fn bind(bind_addr: &str) -> Result<TcpListener> {
        TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind HTTP server on '{bind_addr}'"))
    }

    /// Serve on `listener` until `cancel` fires, then drain in-flight requests.
    ///
    /// # Errors
    /// Returns an error if the router cannot be built or the server fails.
    pub async fn serve(&self, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        let router = self.build_router()?;
        let addr = listener.local_addr()?;
        tracing::info!("HTTP server bound on {}", addr);

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
