//! Thin relay to the external database service.
//!
//! Profiles and leaderboards live in a service this process does not
//! own; these calls forward JSON bodies untouched and translate the
//! upstream status into a [`ProfileError`] the routes can map back to
//! an HTTP status. No schema is imposed on either side.

use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("profile not found")]
    NotFound,
    #[error("upstream rejected request")]
    BadRequest,
    #[error("profile version conflict")]
    Conflict,
    #[error("upstream error (status {0})")]
    Upstream(u16),
    #[error("upstream unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Map a non-success upstream status onto the error taxonomy.
fn status_error(status: u16) -> ProfileError {
    match status {
        400 => ProfileError::BadRequest,
        404 => ProfileError::NotFound,
        409 => ProfileError::Conflict,
        other => ProfileError::Upstream(other),
    }
}

#[derive(Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(db_service_url: impl Into<String>) -> Self {
        let mut base_url = db_service_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn relay(&self, req: reqwest::RequestBuilder) -> Result<Value, ProfileError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16()));
        }
        Ok(resp.json().await?)
    }

    pub async fn get_profile(&self, address: &str) -> Result<Value, ProfileError> {
        let url = format!("{}/profiles/{}", self.base_url, address);
        self.relay(self.http.get(url)).await
    }

    pub async fn upsert_profile(&self, address: &str, body: Value) -> Result<Value, ProfileError> {
        let url = format!("{}/profiles/{}", self.base_url, address);
        self.relay(self.http.post(url).json(&body)).await
    }

    pub async fn leaderboard(&self, period: &str) -> Result<Value, ProfileError> {
        let url = format!("{}/leaderboard?period={}", self.base_url, period);
        self.relay(self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_route_taxonomy() {
        assert!(matches!(status_error(400), ProfileError::BadRequest));
        assert!(matches!(status_error(404), ProfileError::NotFound));
        assert!(matches!(status_error(409), ProfileError::Conflict));
        assert!(matches!(status_error(500), ProfileError::Upstream(500)));
        assert!(matches!(status_error(503), ProfileError::Upstream(503)));
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ProfileClient::new("http://db.internal/");
        assert_eq!(client.base_url, "http://db.internal");
    }
}
