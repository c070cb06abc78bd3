//! Serialized, rate-limited access to the external provider
//!
//! The external provider allows a fixed number of requests per minute and no
//! concurrent calls, so every lookup goes through one FIFO queue drained by a
//! single task. The drain task spaces consecutive dispatches by the interval
//! derived from the per-minute budget and completes each caller's oneshot
//! with the outcome. External failures of any class resolve to
//! [`PlayerLookup::Unavailable`] instead of erroring: callers already treat
//! the external source as best-effort.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, oneshot};
use tracing::{debug, warn};

use crate::constants::rate_limit::DISPATCH_INTERVAL_MS;
use crate::data_fetcher::api::ExternalClient;
use crate::data_fetcher::models::PlayerRecord;

/// Outcome of a player lookup.
///
/// `Unavailable` is a designated non-error value: it means no data could be
/// obtained, and it is structurally distinct from any real record so callers
/// can always tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerLookup {
    Found(PlayerRecord),
    Unavailable,
}

/// Drain task lifecycle. At most one task is draining at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrainState {
    Idle,
    Draining,
}

/// One queued lookup: the identifier to dispatch and the channel that
/// completes the caller's future.
struct PendingRequest {
    player_id: i64,
    reply: oneshot::Sender<PlayerLookup>,
}

struct QueueInner {
    pending: VecDeque<PendingRequest>,
    state: DrainState,
}

/// FIFO queue serializing all calls to the external provider.
///
/// Cloning is cheap and every clone shares the same queue and throttle state.
/// Construct one per external client; tests construct fresh instances with a
/// shrunken interval via [`PlayerRequestQueue::with_interval`].
#[derive(Clone)]
pub struct PlayerRequestQueue {
    client: Arc<ExternalClient>,
    inner: Arc<Mutex<QueueInner>>,
    interval: Duration,
}

impl PlayerRequestQueue {
    /// Creates a queue with the production dispatch interval
    /// (`60000 / MAX_REQUESTS_PER_MINUTE` milliseconds).
    pub fn new(client: ExternalClient) -> Self {
        Self::with_interval(client, Duration::from_millis(DISPATCH_INTERVAL_MS))
    }

    /// Creates a queue with an explicit dispatch interval.
    pub fn with_interval(client: ExternalClient, interval: Duration) -> Self {
        Self {
            client: Arc::new(client),
            inner: Arc::new(Mutex::new(QueueInner {
                pending: VecDeque::new(),
                state: DrainState::Idle,
            })),
            interval,
        }
    }

    /// The minimum spacing between consecutive dispatches.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of lookups waiting in line (excluding the one in flight).
    pub async fn pending_count(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Looks up a player through the queue and waits for the outcome.
    ///
    /// Never fails: external errors resolve to `Unavailable`. Lookups are
    /// serviced strictly in submission order and cannot be withdrawn once
    /// enqueued.
    pub async fn lookup(&self, player_id: i64) -> PlayerLookup {
        let rx = self.enqueue(player_id).await;
        // The drain task always completes the channel before dropping it;
        // a closed channel can only mean the runtime is shutting down.
        rx.await.unwrap_or(PlayerLookup::Unavailable)
    }

    /// Appends a lookup to the tail of the queue and returns the receiver
    /// that the drain task completes.
    ///
    /// O(1) and unbounded: enqueueing always succeeds immediately. If no
    /// drain task is running one is started; otherwise the new request just
    /// waits in line.
    pub async fn enqueue(&self, player_id: i64) -> oneshot::Receiver<PlayerLookup> {
        let (tx, rx) = oneshot::channel();

        let mut inner = self.inner.lock().await;
        inner.pending.push_back(PendingRequest {
            player_id,
            reply: tx,
        });
        debug!(
            "Enqueued external lookup for player {player_id} ({} waiting)",
            inner.pending.len()
        );

        if inner.state == DrainState::Idle {
            inner.state = DrainState::Draining;
            let queue = self.clone();
            tokio::spawn(async move { queue.drain().await });
        }

        rx
    }

    /// Drains the queue head-first until it is empty.
    ///
    /// Exactly one external call is outstanding at any instant: the loop does
    /// not move on until the current dispatch resolves, so a hanging call
    /// stalls everything behind it. The inter-dispatch sleep is skipped once
    /// the queue is empty, and the Idle transition happens under the same
    /// lock enqueue uses, so a second drain task can never start while this
    /// one is alive.
    async fn drain(&self) {
        loop {
            let request = {
                let mut inner = self.inner.lock().await;
                match inner.pending.pop_front() {
                    Some(request) => request,
                    None => {
                        inner.state = DrainState::Idle;
                        return;
                    }
                }
            };

            let player_id = request.player_id;
            let outcome = match self.client.fetch_player(player_id).await {
                Ok(record) => PlayerLookup::Found(record),
                Err(e) => {
                    warn!("External lookup for player {player_id} failed: {e}");
                    PlayerLookup::Unavailable
                }
            };

            // The caller may have stopped waiting; the queue keeps draining
            // regardless.
            if request.reply.send(outcome).is_err() {
                debug!("Caller for player {player_id} went away before the result arrived");
            }

            {
                let mut inner = self.inner.lock().await;
                if inner.pending.is_empty() {
                    inner.state = DrainState::Idle;
                    return;
                }
            }

            // More work queued: respect the budget before the next dispatch.
            tokio::time::sleep(self.interval).await;
        }
    }
}
