pub use super::clan_event::Entity as ClanEvent;
