//! Short-lived interactive workflows awaiting a button click or selection.

use serenity::all::UserId;
use std::time::Instant;

/// What a pending prompt will do once its actor answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    /// Confirm/refuse prompt for deleting a clan.
    DeleteClan { clan: String },
    /// Confirm/refuse prompt for leaving a clan.
    LeaveClan { clan: String },
    /// Clan selection for inviting `target` as a member.
    InviteSelection { target: UserId, target_name: String },
    /// Clan selection for promoting `target` to chief.
    PromoteSelection { target: UserId, target_name: String },
    /// Accept/refuse prompt sent by direct message to an invited user.
    InviteAnswer { clan: String, inviter_name: String },
}

/// A prompt bound to exactly one actor, inert once `expires_at` passes.
#[derive(Debug, Clone)]
pub struct PendingAction {
    /// The only user allowed to answer the prompt.
    pub actor: UserId,
    pub kind: PendingKind,
    pub expires_at: Instant,
}

impl PendingAction {
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
