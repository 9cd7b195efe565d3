//! Domain models and parameter types.
//!
//! Clans have no storage of their own: a clan is the pair of guild roles `Membre <name>`
//! and `Chef <name>`. These models describe the views the service layer derives from
//! those roles, the short-lived interactive workflows bound to a user, and the records
//! of the append-only clan event log.

pub mod clan;
pub mod clan_event;
pub mod pending;
