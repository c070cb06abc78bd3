//! Current-tour selection and match fetching
//!
//! Mirrors the calendar view's notion of "active": an event is current when
//! today falls inside its `[StartDate, EndDate]` window, inclusive on both
//! ends. With overlapping schedules the first event in list order wins; the
//! backend defines no priority beyond that.

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::data_fetcher::api::PrimaryClient;
use crate::data_fetcher::models::{Event, Match};
use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Skipping unparseable event date {raw:?}: {e}");
            None
        }
    }
}

/// Selects the first event whose date window contains `today`.
///
/// Events with missing or malformed dates never qualify. Returns `None` when
/// no event is active, which is a normal outcome between tournaments.
pub fn select_current_tour(events: &[Event], today: NaiveDate) -> Option<&Event> {
    events.iter().find(|event| {
        let (Some(start), Some(end)) = (&event.start_date, &event.end_date) else {
            return false;
        };
        let (Some(start), Some(end)) = (parse_event_date(start), parse_event_date(end)) else {
            return false;
        };
        start <= today && today <= end
    })
}

/// Fetches the match list of the currently running tour.
///
/// Fetches the full event list from the primary source, picks the event
/// active today, and returns its matches verbatim; name resolution is the
/// caller's job. `Ok(None)` means no tour is active right now.
pub async fn current_tour_matches(
    primary: &PrimaryClient,
) -> Result<Option<Vec<Match>>, AppError> {
    let events = primary.fetch_season_events().await?;
    let today = Utc::now().date_naive();

    let Some(event) = select_current_tour(&events, today) else {
        info!("No tour is active on {today}");
        return Ok(None);
    };

    info!("Active tour on {today}: {} (event {})", event.name, event.id);
    let matches = primary.fetch_tour_matches(event.id).await?;
    Ok(Some(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn event(id: i64, start: &str, end: &str) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            season: Some(2024),
            tour: Some("main".to_string()),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }
    }

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_overlapping_windows_pick_first_in_list_order() {
        let events = vec![
            event(1, "2024-01-01", "2024-01-10"),
            event(2, "2024-01-05", "2024-01-20"),
        ];

        // Both windows contain 2024-01-07; list order breaks the tie
        let selected = select_current_tour(&events, date("2024-01-07")).unwrap();
        assert_eq!(selected.id, 1);
    }

    #[test]
    fn test_no_event_contains_today() {
        let events = vec![
            event(1, "2024-01-01", "2024-01-10"),
            event(2, "2024-01-05", "2024-01-20"),
        ];

        assert!(select_current_tour(&events, date("2024-02-01")).is_none());
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let events = vec![event(1, "2024-01-01", "2024-01-10")];

        assert!(select_current_tour(&events, date("2024-01-01")).is_some());
        assert!(select_current_tour(&events, date("2024-01-10")).is_some());
        assert!(select_current_tour(&events, date("2023-12-31")).is_none());
        assert!(select_current_tour(&events, date("2024-01-11")).is_none());
    }

    #[test]
    fn test_events_without_dates_never_qualify() {
        let undated = Event {
            id: 3,
            name: "Unscheduled".to_string(),
            season: None,
            tour: None,
            start_date: None,
            end_date: None,
        };
        let malformed = event(4, "01/02/2024", "bogus");
        let valid = event(5, "2024-01-01", "2024-01-31");

        let events = vec![undated, malformed, valid];
        let selected = select_current_tour(&events, date("2024-01-15")).unwrap();
        assert_eq!(selected.id, 5);
    }

    #[tokio::test]
    async fn test_current_tour_matches_returns_none_without_active_tour() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"ID": 1, "Name": "Past Open",
                     "StartDate": "1999-01-01", "EndDate": "1999-01-10"}]"#,
            ))
            .mount(&server)
            .await;

        let primary =
            PrimaryClient::with_base_url(server.uri(), DEFAULT_HTTP_TIMEOUT_SECONDS).unwrap();
        let result = current_tour_matches(&primary).await.unwrap();
        assert!(result.is_none());
    }
}
