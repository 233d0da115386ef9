use crate::server::{
    data::automod_settings::AutoModSettingsRepository, model::automod::AutoModSettings,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::automod_settings::AutomodSettingsFactory};

mod get_or_default;
mod upsert;
