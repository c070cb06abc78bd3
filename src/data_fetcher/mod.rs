pub mod api;
pub mod models;
pub mod queue;
pub mod resolver;
pub mod tours;

pub use api::{ExternalClient, PrimaryClient};
pub use models::{Event, Match, PlayerRecord, RankingEntry};
pub use queue::{PlayerLookup, PlayerRequestQueue};
pub use resolver::PlayerResolver;
pub use tours::{current_tour_matches, select_current_tour};
