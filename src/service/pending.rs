//! Table of interactive prompts awaiting an answer.
//!
//! Every confirm/refuse prompt and clan selection the bot shows is registered here under
//! a random id embedded in the component custom ids. Entries are bound to one actor and
//! expire after 60 seconds: expired entries are dropped lazily when touched and by the
//! periodic sweep, and an expired prompt simply stops doing anything.

use rand::Rng;
use serenity::all::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::pending::{PendingAction, PendingKind};

/// Time-to-live for pending prompts in seconds.
pub const PENDING_ACTION_TTL_SECONDS: u64 = 60;

/// Shared table of pending prompts.
///
/// Cloning is cheap and every clone shares the same table.
#[derive(Clone)]
pub struct PendingActionService {
    actions: Arc<RwLock<HashMap<u64, PendingAction>>>,
    ttl: Duration,
}

impl PendingActionService {
    /// Creates an empty table whose prompts live for 60 seconds.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(PENDING_ACTION_TTL_SECONDS))
    }

    /// Creates an empty table with a custom prompt lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            actions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Lifetime of every prompt registered in this table.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Registers a prompt answerable only by `actor`.
    ///
    /// # Returns
    /// - `u64` - Id to embed in the prompt's component custom ids
    pub async fn register(&self, actor: UserId, kind: PendingKind) -> u64 {
        let action = PendingAction {
            actor,
            kind,
            expires_at: Instant::now() + self.ttl,
        };

        let mut actions = self.actions.write().await;
        let mut rng = rand::rng();
        let mut id: u64 = rng.random();
        while actions.contains_key(&id) {
            id = rng.random();
        }
        actions.insert(id, action);

        id
    }

    /// Takes the prompt `id` out of the table when `user` is allowed to answer it.
    ///
    /// The prompt is consumed, so each prompt is answered at most once. An expired prompt
    /// is discarded. A prompt answered by anyone but its actor stays in place.
    ///
    /// # Returns
    /// - `Some(PendingAction)` - Prompt exists, is still live, and belongs to `user`
    /// - `None` - Unknown id, expired prompt, or another user's prompt
    pub async fn take(&self, id: u64, user: UserId) -> Option<PendingAction> {
        let mut actions = self.actions.write().await;

        let action = actions.get(&id)?;
        if action.is_expired() {
            actions.remove(&id);
            return None;
        }
        if action.actor != user {
            return None;
        }

        actions.remove(&id)
    }

    /// Drops every expired prompt.
    ///
    /// # Returns
    /// - `usize` - Number of prompts evicted
    pub async fn sweep(&self) -> usize {
        let mut actions = self.actions.write().await;
        let before = actions.len();
        actions.retain(|_, action| !action.is_expired());
        before - actions.len()
    }

    /// Number of prompts currently held, expired or not.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.actions.read().await.len()
    }
}

impl Default for PendingActionService {
    fn default() -> Self {
        Self::new()
    }
}
