//! Router assembly and server lifecycle.

use crate::config::WsdlConfig;
use crate::handlers;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::post,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::{http_request_span, request_id_middleware};
use service_core::shutdown::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const WSDL_ROUTE: &str = "/api/wsdl";

pub fn build_router(config: &WsdlConfig) -> Router {
    Router::new()
        .route(WSDL_ROUTE, post(handlers::handle_soap_request))
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(TraceLayer::new_for_http().make_span_with(http_request_span))
        // Outermost, so the trace span already sees the request id.
        .layer(from_fn(request_id_middleware))
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Binds the listener; port 0 picks a free port (used by tests).
    pub async fn build(config: WsdlConfig) -> Result<Self, AppError> {
        let router = build_router(&config);

        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting {} on {}:{}",
            config.service_name,
            config.server.host,
            port
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serves until Ctrl+C / SIGTERM, then drains in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
