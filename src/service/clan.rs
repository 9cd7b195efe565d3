//! Clan operations: permission and existence checks followed by role mutations.
//!
//! Commands that need a confirmation or a selection are split in two: a `check_*` (or
//! `*_options`) call validates the request when the prompt is opened, and the mutating
//! call runs when the actor answers. The mutating call re-reads the guild roles and fails
//! with `NotFound` when a role it needs disappeared while the prompt was open.
//!
//! Every successful mutation appends an event to the clan event log. A failed append is
//! logged and never changes the outcome reported to the user.

use sea_orm::DatabaseConnection;
use serenity::all::{CreateMessage, Role, UserId};

use crate::{
    data::clan_event::ClanEventRepository,
    error::ClanError,
    model::{
        clan::{chief_role_name, member_role_name, Actor, Promotion, Target},
        clan_event::{ClanEvent, ClanEventKind, CreateClanEventParam},
    },
    service::{
        gateway::{GuildGateway, SentMessage},
        registry::ClanRegistry,
    },
};

/// Number of events shown by the clan history command.
pub const HISTORY_LIMIT: u64 = 10;

pub struct ClanService<'a, G: GuildGateway + ?Sized> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: GuildGateway + ?Sized> ClanService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Reads the guild's current roles into a registry.
    pub async fn registry(&self) -> Result<ClanRegistry, ClanError> {
        let roles = self.gateway.roles().await?;
        Ok(ClanRegistry::new(roles))
    }

    /// Creates the member and chief roles of a new clan.
    ///
    /// The member role is created first. If the chief role cannot be created afterwards,
    /// the member role is deleted again before the error is returned, so a failed creation
    /// leaves no half-created clan behind.
    ///
    /// # Arguments
    /// - `actor` - Invoking user, must be a guild administrator
    /// - `name` - Clan name, used verbatim in both role names
    ///
    /// # Returns
    /// - `Ok(())` - Both roles exist
    /// - `Err(ClanError::PermissionDenied)` - Actor is not an administrator
    /// - `Err(ClanError::AlreadyExists)` - `Membre <name>` already exists
    /// - `Err(ClanError::MissingBotPermission | RequestFailed)` - Discord rejected a call
    pub async fn create_clan(&self, actor: &Actor, name: &str) -> Result<(), ClanError> {
        if !actor.administrator {
            return Err(ClanError::PermissionDenied);
        }

        let registry = self.registry().await?;
        if registry.exists(name) {
            return Err(ClanError::AlreadyExists(name.to_string()));
        }

        let reason = format!("Création du clan {} par {}", name, actor.name);
        self.create_role_pair(name, &reason).await?;

        tracing::info!(clan = name, actor = %actor.user_id, "Created clan");
        self.record(name, ClanEventKind::Created, actor.user_id, None)
            .await;

        Ok(())
    }

    async fn create_role_pair(&self, name: &str, reason: &str) -> Result<(), ClanError> {
        let member_role = self
            .gateway
            .create_role(&member_role_name(name), reason)
            .await?;

        if let Err(err) = self.gateway.create_role(&chief_role_name(name), reason).await {
            let cleanup = format!("Annulation de la création du clan {}", name);
            if let Err(cleanup_err) = self.gateway.delete_role(member_role.id, &cleanup).await {
                tracing::error!(
                    clan = name,
                    role = %member_role.id,
                    "Failed to remove member role of partially created clan: {}",
                    cleanup_err
                );
            }

            return Err(ClanError::from_discord(err));
        }

        Ok(())
    }

    /// Validates a delete request before the confirmation prompt is shown.
    ///
    /// # Returns
    /// - `Ok(())` - Clan exists and the actor is an administrator or its chief
    /// - `Err(ClanError::NotFound)` - No `Membre <name>` role
    /// - `Err(ClanError::PermissionDenied)` - Actor has no authority over the clan
    pub async fn check_delete(&self, actor: &Actor, name: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        Self::check_authority(&registry, actor, name)
    }

    /// Deletes both roles of a clan once the deletion was confirmed.
    ///
    /// The chief role is deleted before the member role.
    pub async fn delete_clan(&self, actor: &Actor, name: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        let member_role = registry
            .member_role(name)
            .ok_or_else(|| ClanError::NotFound(name.to_string()))?;

        let reason = format!("Suppression du clan {} par {}", name, actor.name);
        if let Some(chief_role) = registry.chief_role(name) {
            self.gateway.delete_role(chief_role.id, &reason).await?;
        }
        self.gateway.delete_role(member_role.id, &reason).await?;

        tracing::info!(clan = name, actor = %actor.user_id, "Deleted clan");
        self.record(name, ClanEventKind::Deleted, actor.user_id, None)
            .await;

        Ok(())
    }

    /// Validates a leave request before the confirmation prompt is shown.
    ///
    /// # Returns
    /// - `Ok(())` - Actor holds the member role, the chief role, or both
    /// - `Err(ClanError::NotFound)` - No `Membre <name>` role
    /// - `Err(ClanError::NotInClan)` - Actor holds neither role
    pub async fn check_leave(&self, actor: &Actor, name: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        if !registry.exists(name) {
            return Err(ClanError::NotFound(name.to_string()));
        }

        if registry.relation(name, &actor.roles).is_outsider() {
            return Err(ClanError::NotInClan(name.to_string()));
        }

        Ok(())
    }

    /// Removes both clan roles from the actor once leaving was confirmed.
    ///
    /// Both removals are attempted whichever roles the actor holds; removing a role the
    /// actor does not hold is a no-op.
    pub async fn leave_clan(&self, actor: &Actor, name: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        let member_role = registry
            .member_role(name)
            .ok_or_else(|| ClanError::NotFound(name.to_string()))?;

        let reason = format!("Quitter le clan {}", name);
        self.gateway
            .remove_member_role(actor.user_id, member_role.id, &reason)
            .await?;
        if let Some(chief_role) = registry.chief_role(name) {
            self.gateway
                .remove_member_role(actor.user_id, chief_role.id, &reason)
                .await?;
        }

        tracing::info!(clan = name, actor = %actor.user_id, "Member left clan");
        self.record(name, ClanEventKind::Left, actor.user_id, None)
            .await;

        Ok(())
    }

    /// Rejects targets that cannot take part in clans.
    ///
    /// # Returns
    /// - `Ok(())` - Target is a regular user account
    /// - `Err(ClanError::InvalidTarget)` - Target is a bot account
    pub fn check_target(&self, target: &Target) -> Result<(), ClanError> {
        if target.bot {
            return Err(ClanError::InvalidTarget(target.name.clone()));
        }

        Ok(())
    }

    /// Clans the actor may invite members to: the clans they are chief of.
    ///
    /// Administrators get no wider list here.
    pub async fn invite_options(&self, actor: &Actor) -> Result<Vec<String>, ClanError> {
        let registry = self.registry().await?;
        Ok(registry.chiefed_clans(&actor.roles))
    }

    /// Clans the actor may appoint chiefs in.
    ///
    /// Administrators may pick any clan on the guild; other users only the clans they
    /// are chief of.
    pub async fn promote_options(&self, actor: &Actor) -> Result<Vec<String>, ClanError> {
        let registry = self.registry().await?;
        if actor.administrator {
            Ok(registry.all_clans())
        } else {
            Ok(registry.chiefed_clans(&actor.roles))
        }
    }

    /// Validates the clan selected for an invitation.
    ///
    /// # Returns
    /// - `Ok(())` - Invitation may be sent
    /// - `Err(ClanError::NotFound)` - Clan disappeared since the selection was offered
    /// - `Err(ClanError::AlreadyChief)` - Target already holds `Chef <clan>`
    pub async fn check_invite(&self, target: UserId, clan: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        if !registry.exists(clan) {
            return Err(ClanError::NotFound(clan.to_string()));
        }

        let target_roles = self.gateway.member_roles(target).await?;
        if registry.relation(clan, &target_roles).chief {
            return Err(ClanError::AlreadyChief(clan.to_string()));
        }

        Ok(())
    }

    /// Sends the invitation prompt to the target by direct message.
    ///
    /// # Returns
    /// - `Ok(SentMessage)` - Location of the delivered message
    /// - `Err(ClanError::MissingBotPermission | RequestFailed)` - Message not delivered
    pub async fn deliver_invite(
        &self,
        actor: &Actor,
        target: UserId,
        clan: &str,
        message: CreateMessage,
    ) -> Result<SentMessage, ClanError> {
        let sent = self.gateway.direct_message(target, message).await?;

        tracing::info!(clan, actor = %actor.user_id, target = %target, "Sent clan invitation");
        self.record(clan, ClanEventKind::Invited, actor.user_id, Some(target))
            .await;

        Ok(sent)
    }

    /// Grants `Membre <clan>` to a user who accepted an invitation.
    pub async fn accept_invite(&self, actor: &Actor, clan: &str) -> Result<(), ClanError> {
        let registry = self.registry().await?;
        let member_role = registry
            .member_role(clan)
            .ok_or_else(|| ClanError::NotFound(clan.to_string()))?;

        let reason = format!(
            "Acceptation de l'invitation à rejoindre le clan {} par {}",
            clan, actor.name
        );
        self.gateway
            .add_member_role(actor.user_id, member_role.id, &reason)
            .await?;

        tracing::info!(clan, actor = %actor.user_id, "Member joined clan");
        self.record(clan, ClanEventKind::Joined, actor.user_id, None)
            .await;

        Ok(())
    }

    /// Makes the target chief of `clan`.
    ///
    /// A target holding the member role has it replaced by the chief role. A target
    /// holding neither role is appointed chief directly and does not become a member.
    ///
    /// # Returns
    /// - `Ok(Promotion::Promoted)` - Member role swapped for the chief role
    /// - `Ok(Promotion::Appointed)` - Chief role added to an outsider
    /// - `Err(ClanError::NotFound)` - Clan roles disappeared since the selection was offered
    /// - `Err(ClanError::AlreadyChief)` - Target already holds `Chef <clan>`
    pub async fn promote(
        &self,
        actor: &Actor,
        target: UserId,
        clan: &str,
    ) -> Result<Promotion, ClanError> {
        let registry = self.registry().await?;
        let (Some(member_role), Some(chief_role)) =
            (registry.member_role(clan), registry.chief_role(clan))
        else {
            return Err(ClanError::NotFound(clan.to_string()));
        };

        let target_roles = self.gateway.member_roles(target).await?;
        let relation = registry.relation(clan, &target_roles);
        if relation.chief {
            return Err(ClanError::AlreadyChief(clan.to_string()));
        }

        let reason = format!("Promotion dans le clan {} par {}", clan, actor.name);
        let promotion = if relation.member {
            self.swap_role(target, member_role, chief_role, &reason)
                .await?;
            Promotion::Promoted
        } else {
            self.gateway
                .add_member_role(target, chief_role.id, &reason)
                .await?;
            Promotion::Appointed
        };

        let kind = match promotion {
            Promotion::Promoted => ClanEventKind::Promoted,
            Promotion::Appointed => ClanEventKind::Appointed,
        };
        tracing::info!(
            clan,
            actor = %actor.user_id,
            target = %target,
            ?promotion,
            "Appointed clan chief"
        );
        self.record(clan, kind, actor.user_id, Some(target)).await;

        Ok(promotion)
    }

    async fn swap_role(
        &self,
        user: UserId,
        from: &Role,
        to: &Role,
        reason: &str,
    ) -> Result<(), ClanError> {
        self.gateway
            .remove_member_role(user, from.id, reason)
            .await?;
        self.gateway.add_member_role(user, to.id, reason).await?;
        Ok(())
    }

    /// Most recent events of a clan, newest first.
    ///
    /// Restricted like deletion: administrators and the clan's chiefs only.
    ///
    /// # Returns
    /// - `Ok(Vec<ClanEvent>)` - Up to `HISTORY_LIMIT` events
    /// - `Err(ClanError::NotFound | PermissionDenied)` - As for `check_delete`
    /// - `Err(ClanError::Database)` - Event log could not be read
    pub async fn history(&self, actor: &Actor, name: &str) -> Result<Vec<ClanEvent>, ClanError> {
        let registry = self.registry().await?;
        Self::check_authority(&registry, actor, name)?;

        let repo = ClanEventRepository::new(self.db);
        let events = repo
            .get_recent_by_clan(self.gateway.guild_id().get(), name, HISTORY_LIMIT)
            .await?;

        Ok(events)
    }

    fn check_authority(
        registry: &ClanRegistry,
        actor: &Actor,
        name: &str,
    ) -> Result<(), ClanError> {
        if !registry.exists(name) {
            return Err(ClanError::NotFound(name.to_string()));
        }

        if !actor.administrator && !registry.relation(name, &actor.roles).chief {
            return Err(ClanError::PermissionDenied);
        }

        Ok(())
    }

    async fn record(
        &self,
        clan: &str,
        kind: ClanEventKind,
        actor: UserId,
        target: Option<UserId>,
    ) {
        let repo = ClanEventRepository::new(self.db);
        let param = CreateClanEventParam {
            guild_id: self.gateway.guild_id().get(),
            clan: clan.to_string(),
            kind,
            actor_id: actor.get(),
            target_id: target.map(|id| id.get()),
        };

        if let Err(err) = repo.create(param).await {
            tracing::error!(clan, kind = %kind, "Failed to append clan event: {}", err);
        }
    }
}
