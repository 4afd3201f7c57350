//! Configuration utilities (ports, public URLs, env vars)

use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
};

/// Runtime configuration, resolved once in `main` from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Base URL frames embed in image and post URLs, e.g. the deployment's
    /// public hostname. No trailing slash expected (the navigator strips it).
    pub public_base_url: String,
    /// Base URL of the external profile/leaderboard database service.
    pub db_service_url: String,
    /// Signed account-association triple for the Farcaster manifest.
    /// Empty strings until the deployment is registered.
    pub assoc_header: String,
    pub assoc_payload: String,
    pub assoc_signature: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: server_addr(),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            db_service_url: env::var("DB_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:9090".to_string()),
            assoc_header: env::var("FARCASTER_ASSOC_HEADER").unwrap_or_default(),
            assoc_payload: env::var("FARCASTER_ASSOC_PAYLOAD").unwrap_or_default(),
            assoc_signature: env::var("FARCASTER_ASSOC_SIGNATURE").unwrap_or_default(),
        }
    }
}

/// Socket address to bind the server to.
///
/// Reads the `PORT` env var (Fly.io) or defaults to 8080, binds to 0.0.0.0.
pub fn server_addr() -> SocketAddr {
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}
