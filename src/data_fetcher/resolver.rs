//! Primary-first player resolution with external fallback
//!
//! Lookup order is fixed: the primary backend answers almost everything, and
//! only an explicit "not found" routes the identifier into the rate-limited
//! external queue. Any other primary failure is a hard error, falling back
//! on a server error would hide a broken backend behind slow external calls.

use tracing::{debug, info};

use crate::data_fetcher::api::PrimaryClient;
use crate::data_fetcher::queue::{PlayerLookup, PlayerRequestQueue};
use crate::error::AppError;

/// Resolves players through the primary source, falling back to the external
/// queue on a miss. Holds its collaborators by value; both are cheap clones
/// over shared internals.
#[derive(Clone)]
pub struct PlayerResolver {
    primary: PrimaryClient,
    queue: PlayerRequestQueue,
}

impl PlayerResolver {
    pub fn new(primary: PrimaryClient, queue: PlayerRequestQueue) -> Self {
        Self { primary, queue }
    }

    /// Resolves one player.
    ///
    /// * Primary hit: returns the record, the queue is never touched.
    /// * Primary 404: the benign negative; the lookup is enqueued for the
    ///   external source and its outcome (record or `Unavailable`) returned.
    /// * Any other primary error: propagated, no fallback attempt.
    pub async fn resolve_player(&self, player_id: i64) -> Result<PlayerLookup, AppError> {
        match self.primary.fetch_player(player_id).await {
            Ok(record) => {
                debug!("Player {player_id} resolved from primary source");
                Ok(PlayerLookup::Found(record))
            }
            Err(e) if e.is_not_found() => {
                info!("Player {player_id} missing from primary source, trying external queue");
                Ok(self.queue.lookup(player_id).await)
            }
            Err(e) => Err(e),
        }
    }
}
