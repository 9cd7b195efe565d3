//! Service layer for clan logic and orchestration.
//!
//! Services sit between the Discord interaction handlers and the platform/database:
//!
//! - **Registry** (`registry`): the single lookup over the `Membre `/`Chef ` role naming
//!   convention that every check goes through
//! - **Gateway** (`gateway`): the outbound Discord calls the clan logic needs
//! - **Clan** (`clan`): permission and existence checks followed by role mutations
//! - **Pending** (`pending`): the table of prompts awaiting a click or selection

pub mod clan;
pub mod gateway;
pub mod pending;
pub mod registry;

#[cfg(test)]
mod test;
