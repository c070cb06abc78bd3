//! Client for the rate-limited external provider
//!
//! The external provider is third-party and strictly rate limited, so this
//! client is only ever driven by the request queue; nothing else in the
//! crate holds one. It speaks a single GET endpoint keyed by query parameter
//! and demands an identifying header on every call.

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::data_fetcher::models::PlayerRecord;
use crate::error::AppError;

use super::fetch_utils::fetch;
use super::http_client::create_external_http_client;
use super::urls::build_external_player_url;

/// HTTP client bound to the external provider's base URL, with the
/// identifying header installed as a client default.
#[derive(Debug, Clone)]
pub struct ExternalClient {
    client: Client,
    base_url: String,
}

impl ExternalClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: create_external_http_client(
                config.http_timeout_seconds,
                &config.requested_by,
            )?,
            base_url: config.external_domain.clone(),
        })
    }

    /// Builds a client around an existing base URL, mainly for tests that
    /// point at a mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout_seconds: u64,
        requested_by: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: create_external_http_client(timeout_seconds, requested_by)?,
            base_url: base_url.into(),
        })
    }

    /// Fetches one player by identifier.
    ///
    /// The provider answers with an array of records; the first entry wins.
    /// An empty array means the provider has nothing for this identifier.
    pub async fn fetch_player(&self, player_id: i64) -> Result<PlayerRecord, AppError> {
        let url = build_external_player_url(&self.base_url, player_id);
        let players: Vec<PlayerRecord> = fetch(&self.client, &url).await?;

        debug!(
            "External source returned {} record(s) for player {player_id}",
            players.len()
        );

        players
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data("Player payload was an empty array", &url))
    }
}
