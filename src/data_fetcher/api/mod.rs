//! HTTP access to both data sources

pub mod external;
pub mod fetch_utils;
pub mod http_client;
pub mod primary;
pub mod urls;

pub use external::ExternalClient;
pub use primary::PrimaryClient;
pub use urls::{
    build_events_url, build_external_player_url, build_player_url, build_ranking_url,
    build_tour_matches_url, build_upcoming_matches_url,
};
