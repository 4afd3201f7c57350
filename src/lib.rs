use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod frame;
pub mod game;
pub mod http;
pub mod monitoring;
pub mod profile;
pub mod telemetry;

pub use crate::http::routes::AppState;

/// Build the full application router over `state`.
///
/// Split out of `main` so integration tests can drive the router
/// in-process with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    use crate::http::routes;

    Router::new()
        .route("/healthz", get(routes::health))
        .route("/api/frame", get(routes::frame_root).post(routes::frame_root_action))
        .route("/api/frame/:screen", get(routes::frame_view).post(routes::frame_action))
        .route("/.well-known/farcaster.json", get(routes::manifest))
        .route("/api/game/draw", post(routes::game_draw))
        .route("/api/profile/:address", get(routes::get_profile).post(routes::upsert_profile))
        .route("/api/leaderboard", get(routes::leaderboard))
        .route("/api/analytics", get(routes::analytics_summary))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
