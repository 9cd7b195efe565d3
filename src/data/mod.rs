//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so that
//! database-specific structures never leak into the service layer. The only persisted
//! data is the append-only clan event log; clan membership itself lives in guild roles.

pub mod clan_event;

#[cfg(test)]
mod test;
