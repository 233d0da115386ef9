use crate::server::{
    data::game_server_log::GameServerLogRepository,
    model::game_server_log::CreateGameServerLogParams,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod recent;
