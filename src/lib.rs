//! Snooker Tour Data Client Library
//!
//! This library fetches snooker tournament, match, ranking and player data
//! from a primary internal backend, falling back to a rate-limited public
//! provider for player records the backend does not know. All external calls
//! go through a FIFO request queue that spaces dispatches to the provider's
//! per-minute budget.
//!
//! # Examples
//!
//! ```rust,no_run
//! use max_break::config::Config;
//! use max_break::data_fetcher::queue::{PlayerLookup, PlayerRequestQueue};
//! use max_break::data_fetcher::{ExternalClient, PlayerResolver, PrimaryClient};
//! use max_break::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!
//!     let primary = PrimaryClient::new(&config)?;
//!     let queue = PlayerRequestQueue::new(ExternalClient::new(&config)?);
//!     let resolver = PlayerResolver::new(primary, queue);
//!
//!     match resolver.resolve_player(5).await? {
//!         PlayerLookup::Found(record) => println!("{}", record.display_name()),
//!         PlayerLookup::Unavailable => println!("Unknown Player"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Event, Match, PlayerRecord, RankingEntry};
pub use data_fetcher::queue::{PlayerLookup, PlayerRequestQueue};
pub use data_fetcher::resolver::PlayerResolver;
pub use data_fetcher::tours::{current_tour_matches, select_current_tour};
pub use data_fetcher::{ExternalClient, PrimaryClient};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
