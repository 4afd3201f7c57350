//! HTTP handlers: frame navigation, manifest, profile/leaderboard relay,
//! game draw and diagnostics endpoints.
//!
//! Two distinct error policies meet here. The frame routes never fail:
//! whatever the client posts, they answer 200 with a valid descriptor
//! (worst case, the current screen's own menu). The profile/leaderboard
//! relays are ordinary JSON endpoints and do report 400/404/409/500.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::frame::{parse_button_index, FrameResponse, Navigator, ScreenId};
use crate::game::{DrawOutcome, GameSimulator};
use crate::monitoring::{Analytics, AnalyticsSummary};
use crate::profile::{ProfileClient, ProfileError};

#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<Navigator>,
    pub analytics: Arc<Analytics>,
    pub game: Arc<GameSimulator>,
    pub profiles: ProfileClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            navigator: Arc::new(Navigator::new(config.public_base_url.clone())),
            analytics: Arc::new(Analytics::new()),
            game: Arc::new(GameSimulator::new()),
            profiles: ProfileClient::new(config.db_service_url.clone()),
            config: Arc::new(config),
        }
    }

    fn base_url(&self) -> &str {
        self.config.public_base_url.trim_end_matches('/')
    }
}

pub async fn health() -> &'static str {
    "ok"
}

// ===== Frame routes (always 200) =====

/// GET on the root frame route: the home menu, unconditionally.
pub async fn frame_root(State(state): State<AppState>) -> Json<FrameResponse> {
    state.analytics.record("frame_view", "home");
    Json(state.navigator.render(ScreenId::Home))
}

pub async fn frame_root_action(State(state): State<AppState>, body: Bytes) -> Json<FrameResponse> {
    Json(navigate(&state, ScreenId::Home, &body))
}

/// GET on a named screen: its default descriptor.
pub async fn frame_view(
    State(state): State<AppState>,
    Path(screen): Path<String>,
) -> Json<FrameResponse> {
    let screen = ScreenId::parse(&screen);
    state.analytics.record("frame_view", screen.as_str());
    Json(state.navigator.render(screen))
}

pub async fn frame_action(
    State(state): State<AppState>,
    Path(screen): Path<String>,
    body: Bytes,
) -> Json<FrameResponse> {
    Json(navigate(&state, ScreenId::parse(&screen), &body))
}

/// Shared navigation step. The body is untrusted bytes (raw `Bytes`, not
/// the `String` extractor, which rejects invalid UTF-8 with 400 before
/// the handler runs); parsing failures count as "no button index" and
/// fall back to the current screen.
fn navigate(state: &AppState, screen: ScreenId, body: &[u8]) -> FrameResponse {
    let index = parse_button_index(body);
    let step = state.navigator.step(screen, index);
    if step.fell_back {
        debug!(screen = screen.as_str(), ?index, "frame fallback");
        state.analytics.record("frame_fallback", screen.as_str());
    } else {
        state.analytics.record(
            "frame_navigate",
            format!("{} -> {}", screen.as_str(), step.target.as_str()),
        );
    }
    state.navigator.render(step.target)
}

// ===== Manifest =====

/// Farcaster Mini App manifest.
pub async fn manifest(State(state): State<AppState>) -> Json<Value> {
    let base = state.base_url();
    Json(json!({
        "accountAssociation": {
            "header": state.config.assoc_header,
            "payload": state.config.assoc_payload,
            "signature": state.config.assoc_signature,
        },
        "frame": {
            "version": "1",
            "name": "Pizza Party",
            "homeUrl": base,
            "iconUrl": format!("{base}/images/icon.png"),
            "imageUrl": format!("{base}/images/frame/home.png"),
            "buttonTitle": "🍕 Join Pizza Party",
            "splashImageUrl": format!("{base}/images/splash.png"),
            "splashBackgroundColor": "#b22222",
        },
    }))
}

// ===== Game draw =====

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub entrants: Vec<String>,
    #[serde(rename = "poolCents")]
    pub pool_cents: u64,
}

pub async fn game_draw(
    State(state): State<AppState>,
    Json(req): Json<DrawRequest>,
) -> Json<DrawOutcome> {
    let outcome = state.game.daily_draw(&req.entrants, req.pool_cents);
    state.analytics.record(
        "game_draw",
        format!("{} entrants, {} winners", req.entrants.len(), outcome.winners.len()),
    );
    Json(outcome)
}

// ===== Profile / leaderboard relay =====

fn profile_status(err: &ProfileError) -> StatusCode {
    match err {
        ProfileError::NotFound => StatusCode::NOT_FOUND,
        ProfileError::BadRequest => StatusCode::BAD_REQUEST,
        ProfileError::Conflict => StatusCode::CONFLICT,
        ProfileError::Upstream(_) | ProfileError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn relay_error(err: ProfileError) -> (StatusCode, String) {
    (profile_status(&err), err.to_string())
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state.analytics.record("profile_fetch", address.clone());
    state
        .profiles
        .get_profile(&address)
        .await
        .map(Json)
        .map_err(relay_error)
}

pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state.analytics.record("profile_upsert", address.clone());
    state
        .profiles
        .upsert_profile(&address, body)
        .await
        .map(Json)
        .map_err(relay_error)
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub period: Option<String>,
}

const LEADERBOARD_PERIODS: [&str; 3] = ["daily", "weekly", "all"];

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(LeaderboardQuery { period }): Query<LeaderboardQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let period = period.unwrap_or_else(|| "daily".to_string());
    if !LEADERBOARD_PERIODS.contains(&period.as_str()) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("unknown leaderboard period: {period}"),
        ));
    }
    state.analytics.record("leaderboard_fetch", period.clone());
    state
        .profiles
        .leaderboard(&period)
        .await
        .map(Json)
        .map_err(relay_error)
}

// ===== Diagnostics =====

pub async fn analytics_summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    Json(state.analytics.summary())
}
