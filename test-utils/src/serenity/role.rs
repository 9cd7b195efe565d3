//! Test factory for creating Serenity Role objects.
//!
//! Roles are created by deserializing JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10);
/// assert_eq!(role.name, "Admin");
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    build_role(role_id, name, color, position, false)
}

/// Creates a hoisted, mentionable role the way the bot creates clan roles.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, e.g. `"Membre Alpha"`
/// - `position` - Role position in the hierarchy
pub fn create_test_clan_role(role_id: u64, name: &str, position: i16) -> Role {
    build_role(role_id, name, 0, position, true)
}

fn build_role(role_id: u64, name: &str, color: u32, position: i16, clan: bool) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "hoist": clan,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": clan,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
