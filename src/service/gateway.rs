//! Outbound Discord calls used by the clan service.
//!
//! `GuildGateway` is the seam between clan logic and the platform. The serenity
//! implementation is bound to the configured guild; tests substitute an in-memory guild.

use serenity::{
    all::{ChannelId, CreateMessage, EditRole, GuildId, MessageId, Role, RoleId, UserId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

/// Location of a message sent by the bot, kept so it can be deleted later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// Role and messaging operations on one guild.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// The guild every operation applies to.
    fn guild_id(&self) -> GuildId;

    /// Current roles of the guild.
    async fn roles(&self) -> Result<Vec<Role>, serenity::Error>;

    /// Current roles held by a guild member.
    async fn member_roles(&self, user_id: UserId) -> Result<Vec<RoleId>, serenity::Error>;

    /// Creates a mentionable role displayed separately in the member list.
    async fn create_role(&self, name: &str, reason: &str) -> Result<Role, serenity::Error>;

    async fn delete_role(&self, role_id: RoleId, reason: &str) -> Result<(), serenity::Error>;

    async fn add_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error>;

    /// Removes a role from a member; removing a role the member does not hold succeeds.
    async fn remove_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error>;

    async fn direct_message(
        &self,
        user_id: UserId,
        message: CreateMessage,
    ) -> Result<SentMessage, serenity::Error>;

    async fn delete_message(&self, message: SentMessage) -> Result<(), serenity::Error>;
}

/// `GuildGateway` backed by serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl GuildGateway for SerenityGateway {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    async fn roles(&self) -> Result<Vec<Role>, serenity::Error> {
        let roles = self.guild_id.roles(&self.http).await?;
        Ok(roles.into_values().collect())
    }

    async fn member_roles(&self, user_id: UserId) -> Result<Vec<RoleId>, serenity::Error> {
        let member = self.guild_id.member(&self.http, user_id).await?;
        Ok(member.roles)
    }

    async fn create_role(&self, name: &str, reason: &str) -> Result<Role, serenity::Error> {
        let builder = EditRole::new()
            .name(name)
            .mentionable(true)
            .hoist(true)
            .audit_log_reason(reason);

        self.guild_id.create_role(&self.http, builder).await
    }

    async fn delete_role(&self, role_id: RoleId, reason: &str) -> Result<(), serenity::Error> {
        self.http
            .delete_role(self.guild_id, role_id, Some(reason))
            .await
    }

    async fn add_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error> {
        self.http
            .add_member_role(self.guild_id, user_id, role_id, Some(reason))
            .await
    }

    async fn remove_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error> {
        self.http
            .remove_member_role(self.guild_id, user_id, role_id, Some(reason))
            .await
    }

    async fn direct_message(
        &self,
        user_id: UserId,
        message: CreateMessage,
    ) -> Result<SentMessage, serenity::Error> {
        let channel = user_id.create_dm_channel(&self.http).await?;
        let sent = channel.send_message(&self.http, message).await?;

        Ok(SentMessage {
            channel_id: sent.channel_id,
            message_id: sent.id,
        })
    }

    async fn delete_message(&self, message: SentMessage) -> Result<(), serenity::Error> {
        self.http
            .delete_message(message.channel_id, message.message_id, None)
            .await
    }
}
