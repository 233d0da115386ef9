use crate::server::data::user_data::UserDataRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::ticket::TicketFactory};

mod delete;
mod export;
