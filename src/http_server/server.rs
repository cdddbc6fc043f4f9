//! # HTTP Server
//!
//! Combines the query and observability routers behind CORS and request
//! tracing, and serves them with axum.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::query_routes::query_routes;
use super::state::AppState;
use crate::observability::{log_event_with_fields, Event};
use crate::query::Operation;

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration over `state`
    pub fn new(state: AppState) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    pub fn with_config(config: HttpServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(observability_routes(state.clone()))
            .merge(query_routes(state))
            .layer(cors)
            .layer(
                // tower-http defaults to DEBUG, below the default filter
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        let addr_str = addr.to_string();
        let routes = Operation::ALL
            .iter()
            .map(|op| format!("/{}", op.name()))
            .collect::<Vec<_>>()
            .join(",");
        log_event_with_fields(
            Event::ServerListening,
            &[("addr", addr_str.as_str()), ("routes", routes.as_str())],
        );

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(AppState::unavailable());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, AppState::with_table(Table::new(Vec::new())));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_requests_traced_at_info() {
        use std::io;
        use std::sync::{Arc, Mutex};

        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let router = HttpServer::new(AppState::unavailable()).router();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            runtime.block_on(async {
                router
                    .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
                    .await
                    .unwrap();
            });
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("started processing request"), "{}", output);
        assert!(output.contains("finished processing request"), "{}", output);
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, AppState::unavailable()).router();
    }
}
