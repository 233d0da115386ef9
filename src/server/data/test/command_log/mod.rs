use crate::server::{
    data::command_log::CommandLogRepository, model::command_log::CreateCommandLogParams,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod recent;
