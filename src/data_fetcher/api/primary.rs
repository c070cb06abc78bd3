//! Client for the primary (internal) backend
//!
//! The primary backend is the fast, first-choice source for every record
//! kind. It is consumed strictly as request/response: one call, no retry,
//! and a 404 on the player endpoint is a benign negative rather than an
//! error worth reporting.

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::data_fetcher::models::{Event, Match, PlayerRecord, RankingEntry};
use crate::error::AppError;

use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::urls::{
    build_events_url, build_player_url, build_ranking_url, build_tour_matches_url,
    build_upcoming_matches_url,
};

/// HTTP client bound to the primary backend's base URL.
#[derive(Debug, Clone)]
pub struct PrimaryClient {
    client: Client,
    base_url: String,
}

impl PrimaryClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client(config.http_timeout_seconds)?,
            base_url: config.primary_domain.clone(),
        })
    }

    /// Builds a client around an existing base URL, mainly for tests that
    /// point at a mock server.
    pub fn with_base_url(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client(timeout_seconds)?,
            base_url: base_url.into(),
        })
    }

    /// Fetches the full season event list.
    pub async fn fetch_season_events(&self) -> Result<Vec<Event>, AppError> {
        fetch(&self.client, &build_events_url(&self.base_url)).await
    }

    /// Fetches the upcoming match list.
    pub async fn fetch_upcoming_matches(&self) -> Result<Vec<Match>, AppError> {
        fetch(&self.client, &build_upcoming_matches_url(&self.base_url)).await
    }

    /// Fetches the money ranking.
    pub async fn fetch_ranking(&self) -> Result<Vec<RankingEntry>, AppError> {
        fetch(&self.client, &build_ranking_url(&self.base_url)).await
    }

    /// Fetches the matches of one event.
    pub async fn fetch_tour_matches(&self, event_id: i64) -> Result<Vec<Match>, AppError> {
        fetch(&self.client, &build_tour_matches_url(&self.base_url, event_id)).await
    }

    /// Fetches one player by identifier.
    ///
    /// The backend serves player detail as a one-element array; the wire
    /// quirk stays here so callers deal in plain records. An empty array is
    /// reported as missing data, and a 404 surfaces as `ApiNotFound` which
    /// the fallback resolver treats as the signal to try the external source.
    pub async fn fetch_player(&self, player_id: i64) -> Result<PlayerRecord, AppError> {
        let url = build_player_url(&self.base_url, player_id);
        let players: Vec<PlayerRecord> = fetch(&self.client, &url).await?;

        debug!(
            "Primary source returned {} record(s) for player {player_id}",
            players.len()
        );

        players
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data("Player payload was an empty array", &url))
    }
}
