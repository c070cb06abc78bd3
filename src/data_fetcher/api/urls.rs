//! URL building utilities for both data sources

/// Builds the season events URL on the primary backend.
///
/// # Example
/// ```
/// use max_break::data_fetcher::api::build_events_url;
///
/// let url = build_events_url("http://api.example.com");
/// assert_eq!(url, "http://api.example.com/events/");
/// ```
pub fn build_events_url(primary_domain: &str) -> String {
    format!("{}/events/", primary_domain.trim_end_matches('/'))
}

/// Builds the player detail URL on the primary backend.
///
/// # Example
/// ```
/// use max_break::data_fetcher::api::build_player_url;
///
/// let url = build_player_url("http://api.example.com", 42);
/// assert_eq!(url, "http://api.example.com/players/42/");
/// ```
pub fn build_player_url(primary_domain: &str, player_id: i64) -> String {
    format!("{}/players/{player_id}/", primary_domain.trim_end_matches('/'))
}

/// Builds the money ranking URL on the primary backend.
pub fn build_ranking_url(primary_domain: &str) -> String {
    format!("{}/ranking/", primary_domain.trim_end_matches('/'))
}

/// Builds the upcoming matches URL on the primary backend.
pub fn build_upcoming_matches_url(primary_domain: &str) -> String {
    format!("{}/matches/upcoming/", primary_domain.trim_end_matches('/'))
}

/// Builds the URL for the matches of one event on the primary backend.
///
/// # Example
/// ```
/// use max_break::data_fetcher::api::build_tour_matches_url;
///
/// let url = build_tour_matches_url("http://api.example.com", 1407);
/// assert_eq!(url, "http://api.example.com/tours/1407/");
/// ```
pub fn build_tour_matches_url(primary_domain: &str, event_id: i64) -> String {
    format!("{}/tours/{event_id}/", primary_domain.trim_end_matches('/'))
}

/// Builds the single player lookup URL on the external provider.
///
/// The provider keys every request off query parameters on its root path;
/// there is no batch form, one identifier per call.
///
/// # Example
/// ```
/// use max_break::data_fetcher::api::build_external_player_url;
///
/// let url = build_external_player_url("https://api.snooker.org", 5);
/// assert_eq!(url, "https://api.snooker.org/?p=5");
/// ```
pub fn build_external_player_url(external_domain: &str, player_id: i64) -> String {
    format!("{}/?p={player_id}", external_domain.trim_end_matches('/'))
}
