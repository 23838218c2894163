use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
#[cfg(not(debug_assertions))]
use tower_http::cors::AllowMethods;
use tower_http::cors::CorsLayer;

use crate::catalog::client::GraphqlCatalogAdapter;
use crate::http_server::routes::{movies, music};
use crate::http_server::state::AppState;
use crate::remote::RemoteEnv;

async fn root() -> &'static str {
    "catalog-manager"
}

pub struct HttpServerConfig {
    pub port: u16,
    pub env: RemoteEnv,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/movies", get(movies::list_loader))
        .route(
            "/movies/add",
            get(movies::add_loader).post(movies::create_action),
        )
        .route("/movies/delete", post(movies::delete_action))
        .route(
            "/movies/{id}",
            get(movies::update_loader).post(movies::update_action),
        )
        .route("/music", get(music::list_loader))
        .route(
            "/music/add",
            get(music::add_loader).post(music::create_action),
        )
        .route("/music/delete", post(music::delete_action))
        .route(
            "/music/{id}",
            get(music::update_loader).post(music::update_action),
        )
        .with_state(state)
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let app_state = Arc::new(AppState {
        api: Arc::new(GraphqlCatalogAdapter::new()),
        env: config.env,
    });

    #[cfg(debug_assertions)]
    let cors_layer = CorsLayer::permissive();

    #[cfg(not(debug_assertions))]
    let cors_layer = CorsLayer::new().allow_methods(AllowMethods::any());

    let app = router(app_state).layer(ServiceBuilder::new().layer(cors_layer));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", config.port))?;
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
