//! Clan naming convention and the actors that act on clans.

use serenity::all::{Member, RoleId, User, UserId};

/// Prefix of the role granted to every clan member.
pub const MEMBER_ROLE_PREFIX: &str = "Membre ";
/// Prefix of the role granted to clan chiefs.
pub const CHIEF_ROLE_PREFIX: &str = "Chef ";

/// Name of the member role backing `clan`.
pub fn member_role_name(clan: &str) -> String {
    format!("{}{}", MEMBER_ROLE_PREFIX, clan)
}

/// Name of the chief role backing `clan`.
pub fn chief_role_name(clan: &str) -> String {
    format!("{}{}", CHIEF_ROLE_PREFIX, clan)
}

/// A user's standing in one clan.
///
/// The two flags are independent: a chief does not necessarily hold the member role,
/// and nothing prevents a user from holding both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClanRelation {
    /// User holds `Membre <clan>`.
    pub member: bool,
    /// User holds `Chef <clan>`.
    pub chief: bool,
}

impl ClanRelation {
    /// User holds neither clan role.
    pub fn is_outsider(&self) -> bool {
        !self.member && !self.chief
    }
}

/// The guild member invoking a command or clicking a component.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: UserId,
    pub name: String,
    /// Roles held by the actor at the time of the interaction.
    pub roles: Vec<RoleId>,
    /// Actor holds the guild-wide administrator permission.
    pub administrator: bool,
}

impl Actor {
    /// Builds the actor from an interaction's user and resolved guild member.
    ///
    /// Interactions outside a guild carry no member: such actors hold no roles and are
    /// never administrators.
    pub fn from_interaction(user: &User, member: Option<&Member>) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            roles: member.map(|m| m.roles.clone()).unwrap_or_default(),
            administrator: member
                .and_then(|m| m.permissions)
                .is_some_and(|p| p.administrator()),
        }
    }
}

/// The member selected from a user context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub user_id: UserId,
    pub name: String,
    pub bot: bool,
}

impl From<&User> for Target {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            bot: user.bot,
        }
    }
}

/// How a user became chief of a clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// The user was a member; the member role was replaced by the chief role.
    Promoted,
    /// The user held neither role and was appointed chief directly.
    Appointed,
}
