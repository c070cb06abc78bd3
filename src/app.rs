//! Command implementations for the CLI binary
//!
//! Each command fetches its rows from the primary backend, resolves the
//! player and tour names it needs, and prints styled lines to stdout. Name
//! resolution goes through the fallback resolver; within one command run a
//! player is resolved at most once and reused from a local map.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use crossterm::style::Stylize;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::{UNKNOWN_PLAYER, UNKNOWN_TOUR};
use crate::data_fetcher::models::{Event, Match};
use crate::data_fetcher::queue::PlayerLookup;
use crate::data_fetcher::tours::{current_tour_matches, select_current_tour};
use crate::data_fetcher::{ExternalClient, PlayerRequestQueue, PlayerResolver, PrimaryClient};
use crate::error::AppError;

/// Shared handles for one command run.
pub struct App {
    primary: PrimaryClient,
    resolver: PlayerResolver,
}

impl App {
    /// Wires up both source clients and the queue from configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let primary = PrimaryClient::new(config)?;
        let external = ExternalClient::new(config)?;
        let queue = PlayerRequestQueue::new(external);
        let resolver = PlayerResolver::new(primary.clone(), queue);
        Ok(Self { primary, resolver })
    }

    /// Builds an app around existing collaborators, mainly for tests.
    pub fn with_parts(primary: PrimaryClient, resolver: PlayerResolver) -> Self {
        Self { primary, resolver }
    }

    /// Resolves display names for a set of players, one lookup per distinct
    /// identifier. Unresolvable players map to the placeholder name.
    pub async fn resolve_player_names(
        &self,
        player_ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>, AppError> {
        let mut names: HashMap<i64, String> = HashMap::new();

        for player_id in player_ids {
            if names.contains_key(&player_id) {
                continue;
            }
            let name = match self.resolver.resolve_player(player_id).await? {
                PlayerLookup::Found(record) => {
                    let name = record.display_name();
                    if name.is_empty() {
                        UNKNOWN_PLAYER.to_string()
                    } else {
                        name
                    }
                }
                PlayerLookup::Unavailable => UNKNOWN_PLAYER.to_string(),
            };
            names.insert(player_id, name);
        }

        Ok(names)
    }

    /// Fetches event names for a set of events from the season calendar.
    async fn resolve_tour_names(
        &self,
        event_ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>, AppError> {
        let events = self.primary.fetch_season_events().await?;
        let by_id: HashMap<i64, &Event> = events.iter().map(|e| (e.id, e)).collect();

        Ok(event_ids
            .into_iter()
            .map(|id| {
                let name = by_id
                    .get(&id)
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| UNKNOWN_TOUR.to_string());
                (id, name)
            })
            .collect())
    }

    fn print_match(&self, m: &Match, names: &HashMap<i64, String>, tours: &HashMap<i64, String>) {
        let unknown = || UNKNOWN_PLAYER.to_string();
        let player1 = names.get(&m.player1_id).cloned().unwrap_or_else(unknown);
        let player2 = names.get(&m.player2_id).cloned().unwrap_or_else(unknown);
        let tour = tours
            .get(&m.event_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_TOUR.to_string());
        let scheduled = m.scheduled_date.as_deref().unwrap_or("TBD");

        println!(
            "{}  {}  {}",
            player1.bold(),
            m.score_display().yellow(),
            player2.bold()
        );
        println!("    {}  {}", scheduled.dark_grey(), tour.cyan());
        if let Some(note) = &m.note {
            println!("    {}", note.as_str().italic());
        }
    }

    /// `matches`: the upcoming match list with resolved names.
    pub async fn show_upcoming_matches(&self) -> Result<(), AppError> {
        let matches = self.primary.fetch_upcoming_matches().await?;
        info!("Fetched {} upcoming matches", matches.len());

        if matches.is_empty() {
            println!("{}", "No upcoming matches.".dark_grey());
            return Ok(());
        }

        let player_ids: Vec<i64> = matches
            .iter()
            .flat_map(|m| [m.player1_id, m.player2_id])
            .collect();
        let names = self.resolve_player_names(player_ids).await?;
        let tours = self
            .resolve_tour_names(matches.iter().map(|m| m.event_id))
            .await?;

        for m in &matches {
            self.print_match(m, &names, &tours);
        }
        Ok(())
    }

    /// `ranking`: the money ranking with resolved names.
    pub async fn show_ranking(&self) -> Result<(), AppError> {
        let ranking = self.primary.fetch_ranking().await?;
        info!("Fetched {} ranking rows", ranking.len());

        let names = self
            .resolve_player_names(ranking.iter().map(|r| r.player_id))
            .await?;

        for entry in &ranking {
            let name = names
                .get(&entry.player_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());
            let sum = entry
                .sum
                .map(|s| format!("${s}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>3}. {}  {}",
                entry.position,
                name.bold(),
                sum.green()
            );
        }
        Ok(())
    }

    /// `calendar`: season events grouped into active, upcoming and past.
    pub async fn show_calendar(&self) -> Result<(), AppError> {
        let events = self.primary.fetch_season_events().await?;
        let today = Utc::now().date_naive();
        let groups = group_events_by_status(&events, today);

        for (heading, group) in [
            ("Active", &groups.active),
            ("Upcoming", &groups.upcoming),
            ("Past", &groups.past),
        ] {
            if group.is_empty() {
                continue;
            }
            println!("{}", heading.cyan().bold());
            for event in group {
                let window = match (&event.start_date, &event.end_date) {
                    (Some(start), Some(end)) => format!("{start} - {end}"),
                    _ => "unscheduled".to_string(),
                };
                println!("  {}  {}", event.name.as_str().bold(), window.dark_grey());
            }
        }
        Ok(())
    }

    /// `tour`: the matches of the tour running today.
    pub async fn show_current_tour(&self) -> Result<(), AppError> {
        match current_tour_matches(&self.primary).await? {
            None => {
                println!("{}", "No active tour.".dark_grey());
                Ok(())
            }
            Some(matches) => {
                let player_ids: Vec<i64> = matches
                    .iter()
                    .flat_map(|m| [m.player1_id, m.player2_id])
                    .collect();
                let names = self.resolve_player_names(player_ids).await?;
                let tours = self
                    .resolve_tour_names(matches.iter().map(|m| m.event_id))
                    .await?;

                for m in &matches {
                    self.print_match(m, &names, &tours);
                }
                Ok(())
            }
        }
    }
}

/// Season events bucketed by where today falls relative to their window.
#[derive(Debug, Default)]
pub struct EventGroups<'a> {
    pub active: Vec<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

/// Groups events by status: active when today is inside the window
/// (inclusive), past when the window has closed, upcoming otherwise.
/// Undated events count as upcoming.
pub fn group_events_by_status(events: &[Event], today: NaiveDate) -> EventGroups<'_> {
    let mut groups = EventGroups::default();

    for event in events {
        if select_current_tour(std::slice::from_ref(event), today).is_some() {
            groups.active.push(event);
            continue;
        }

        let ended = event
            .end_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .is_some_and(|end| end < today);
        if ended {
            groups.past.push(event);
        } else {
            if event.end_date.is_none() || event.start_date.is_none() {
                warn!("Event {} has no schedule, listing as upcoming", event.id);
            }
            groups.upcoming.push(event);
        }
    }

    groups
}
