pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_tickets_table;
mod m20260301_000002_create_mod_logs_table;
mod m20260301_000003_create_automod_settings_table;
mod m20260302_000004_create_game_server_logs_table;
mod m20260303_000005_create_command_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_tickets_table::Migration),
            Box::new(m20260301_000002_create_mod_logs_table::Migration),
            Box::new(m20260301_000003_create_automod_settings_table::Migration),
            Box::new(m20260302_000004_create_game_server_logs_table::Migration),
            Box::new(m20260303_000005_create_command_logs_table::Migration),
        ]
    }
}
