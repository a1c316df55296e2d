use order_matcher::create_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_matcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_router();

    let addr = std::env::var("MATCHER_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("order matcher API running on http://{addr}");
    tracing::info!("match endpoint: POST http://{addr}/api/v1/match");
    tracing::info!("health check:   http://{addr}/health");
    tracing::info!("openapi doc:    http://{addr}/api-docs/openapi.json");

    axum::serve(listener, app).await.expect("server error");
}
