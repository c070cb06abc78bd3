use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player record as returned by either source.
///
/// Both the primary backend and the external provider use PascalCase field
/// names on the wire. Name parts can each be missing; everything beyond the
/// identity and name fields is carried along untouched so callers can forward
/// records verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "MiddleName", default)]
    pub middle_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerRecord {
    /// Joins the present name parts with single spaces.
    ///
    /// Returns an empty string when no name part is present; the display
    /// layer substitutes its own placeholder in that case.
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A tournament on the season calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Season", default)]
    pub season: Option<i32>,
    #[serde(rename = "Tour", default)]
    pub tour: Option<String>,
    /// Start date in YYYY-MM-DD format; missing for unscheduled events
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    /// End date in YYYY-MM-DD format; missing for unscheduled events
    #[serde(rename = "EndDate", default)]
    pub end_date: Option<String>,
}

/// One match of an event, in the shape the primary backend serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "EventID")]
    pub event_id: i64,
    #[serde(rename = "Player1ID")]
    pub player1_id: i64,
    #[serde(rename = "Player2ID")]
    pub player2_id: i64,
    #[serde(rename = "Score1", default)]
    pub score1: Option<i32>,
    #[serde(rename = "Score2", default)]
    pub score2: Option<i32>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "ScheduledDate", default)]
    pub scheduled_date: Option<String>,
}

impl Match {
    /// Formats the score column: "3 - 1" when both scores are present,
    /// "vs" for matches that have not started.
    pub fn score_display(&self) -> String {
        match (self.score1, self.score2) {
            (Some(s1), Some(s2)) => format!("{s1} - {s2}"),
            _ => "vs".to_string(),
        }
    }
}

/// One row of the money ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(rename = "PlayerID")]
    pub player_id: i64,
    #[serde(rename = "Position")]
    pub position: i32,
    #[serde(rename = "Sum", default)]
    pub sum: Option<i64>,
    #[serde(rename = "Season", default)]
    pub season: Option<i32>,
    #[serde(rename = "Type", default)]
    pub ranking_type: Option<String>,
}
