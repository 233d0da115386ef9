use crate::server::{
    data::mod_log::ModLogRepository,
    model::mod_log::{CreateModLogParams, ModLogAction},
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod recent;
