use super::*;

mod create;
mod get_recent_by_clan;
