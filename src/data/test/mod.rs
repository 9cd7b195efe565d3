use crate::data::clan_event::ClanEventRepository;
use crate::model::clan_event::{ClanEventKind, CreateClanEventParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod clan_event;
