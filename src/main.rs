use axum::{http::HeaderValue, http::Method, routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seo_meta_analyzer::config::Config;
use seo_meta_analyzer::handlers;
use seo_meta_analyzer::handlers::shared::build_http_client;
use seo_meta_analyzer::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing: JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "seo_meta_analyzer=info,tower_http=info"
            .parse()
            .unwrap()
    });

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 SEO meta analyzer starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!(
        timeout_secs = config.fetch.timeout.as_secs(),
        max_redirects = config.fetch.max_redirects,
        max_body_bytes = config.fetch.max_body_bytes,
        "📝 Configuration loaded"
    );

    // The original proxy allowed every origin; ALLOWED_ORIGINS narrows that.
    let cors = if config.allowed_origins.is_empty() {
        info!("🔓 CORS: permissive");
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid origin in ALLOWED_ORIGINS");
                    None
                }
            })
            .collect();
        info!(origins = ?config.allowed_origins, "🔒 CORS: restricted");
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET])
    };

    let http_client = build_http_client(&config.fetch).expect("Failed to build HTTP client");

    let app_state = AppState {
        http_client,
        fetch_limits: config.fetch,
    };

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = Router::new()
        // Health check + metrics
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        // Proxy + analysis
        .route("/fetch-url", get(handlers::fetch_url::fetch_url))
        .route("/analyze", get(handlers::analyze::analyze))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer)
        .layer(cors)
        .with_state(app_state);

    let addr = config.server_addr();
    info!("🎧 Proxy server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
