use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{ModLogs, Tickets};
///
/// let test = TestBuilder::new()
///     .with_table(Tickets)
///     .with_table(ModLogs)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including unique constraints declared on the entity. The table
    /// will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables touched by the ticket lifecycle.
    ///
    /// Opening and closing tickets writes both the ticket row and an activity
    /// log entry, so this adds `Tickets` and `ModLogs`.
    pub fn with_ticket_tables(self) -> Self {
        self.with_table(Tickets).with_table(ModLogs)
    }

    /// Adds the tables read and written by the auto-moderation engine.
    pub fn with_automod_tables(self) -> Self {
        self.with_table(AutomodSettings).with_table(ModLogs)
    }

    /// Adds every table in the schema.
    ///
    /// Used by user-data export/deletion tests and HTTP router tests that touch
    /// several domains at once.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Tickets)
            .with_table(ModLogs)
            .with_table(AutomodSettings)
            .with_table(GameServerLogs)
            .with_table(CommandLogs)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
