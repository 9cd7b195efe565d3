//! SeaORM entity definitions for the clan bot database.

pub mod prelude;

pub mod clan_event;
