use http::{HeaderName, Method, header::CONTENT_TYPE};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use todo_api::{
    InMemoryStorage, TodoService,
    api::{
        handlers::{USERNAME_HEADER, api_routes},
        openapi::ApiDoc,
    },
    config::CONFIG,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!("Loaded configuration: {:?}", *CONFIG);

    let service = Arc::new(TodoService::new(InMemoryStorage::new()));

    let app = api_routes(service)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
                .allow_headers([CONTENT_TYPE, HeaderName::from_static(USERNAME_HEADER)]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    let addr = SocketAddr::new(CONFIG.host, CONFIG.port);
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
