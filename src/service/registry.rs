//! Clan lookups over a snapshot of guild roles.
//!
//! Every existence, membership and listing check reads through `ClanRegistry`, so the
//! `Membre <clan>` / `Chef <clan>` naming convention is matched in exactly one place.
//! Matching is exact: no case folding, no trimming.

use serenity::all::{Role, RoleId};

use crate::model::clan::{chief_role_name, member_role_name, ClanRelation, CHIEF_ROLE_PREFIX};

/// Snapshot of a guild's roles interpreted as clans.
#[derive(Debug, Clone)]
pub struct ClanRegistry {
    /// Guild roles ordered by hierarchy position, lowest first, then by name.
    roles: Vec<Role>,
}

impl ClanRegistry {
    pub fn new(mut roles: Vec<Role>) -> Self {
        roles.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { roles }
    }

    /// The `Membre <clan>` role, if present on the guild.
    pub fn member_role(&self, clan: &str) -> Option<&Role> {
        self.find(&member_role_name(clan))
    }

    /// The `Chef <clan>` role, if present on the guild.
    pub fn chief_role(&self, clan: &str) -> Option<&Role> {
        self.find(&chief_role_name(clan))
    }

    /// A clan exists when its member role exists.
    pub fn exists(&self, clan: &str) -> bool {
        self.member_role(clan).is_some()
    }

    /// Standing of a user, given the roles they hold, in `clan`.
    pub fn relation(&self, clan: &str, user_roles: &[RoleId]) -> ClanRelation {
        ClanRelation {
            member: self.holds(&member_role_name(clan), user_roles),
            chief: self.holds(&chief_role_name(clan), user_roles),
        }
    }

    /// Names of the clans whose chief role the user holds.
    pub fn chiefed_clans(&self, user_roles: &[RoleId]) -> Vec<String> {
        self.clan_names(|role| user_roles.contains(&role.id))
    }

    /// Names of every clan on the guild, read from the chief roles.
    pub fn all_clans(&self) -> Vec<String> {
        self.clan_names(|_| true)
    }

    fn find(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name == name)
    }

    fn holds(&self, name: &str, user_roles: &[RoleId]) -> bool {
        self.roles
            .iter()
            .any(|role| role.name == name && user_roles.contains(&role.id))
    }

    fn clan_names(&self, include: impl Fn(&Role) -> bool) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for role in self.roles.iter().filter(|role| include(role)) {
            let Some(clan) = role.name.strip_prefix(CHIEF_ROLE_PREFIX) else {
                continue;
            };

            if !clan.is_empty() && !names.iter().any(|name| name == clan) {
                names.push(clan.to_string());
            }
        }

        names
    }
}
