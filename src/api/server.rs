use crate::api::config::Config;
use crate::api::response::HealthResponse;
use crate::api::routes::{
    account_routes, admin_routes, cart_routes, catalog_routes, checkout_routes, promotion_routes,
};
use crate::api::state::{AppState, StateError};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug)]
pub enum ServerError {
    State(StateError),
    Bind(std::io::Error),
    Serve(std::io::Error),
}

impl std::error::Error for ServerError {}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::State(e) => write!(f, "{}", e),
            ServerError::Bind(e) => write!(f, "Failed to bind to address: {}", e),
            ServerError::Serve(e) => write!(f, "Failed to start the server: {}", e),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The full HTTP surface, ready to serve or to drive from tests.
pub fn app(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api", get(health))
        .nest("/api/v1", catalog_routes::routes())
        .nest("/api/v1/cart", cart_routes::routes())
        .nest("/api/v1/checkout", checkout_routes::routes())
        .nest("/api/v1/promotions", promotion_routes::routes())
        .nest("/api/v1/accounts", account_routes::routes())
        .nest("/api/v1/admin", admin_routes::routes());

    // Local media is only served when it lives under this host.
    let media_url = state.config.media_url.trim_end_matches('/').to_string();
    if media_url.starts_with('/') && media_url.len() > 1 {
        router = router.nest_service(&media_url, ServeDir::new(&state.config.media_root));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

pub async fn start(config: Config) -> Result<(), ServerError> {
    let bind_addr = config.bind_addr;
    let state = AppState::from_config(config).map_err(ServerError::State)?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .await
        .map_err(ServerError::Serve)
}
