//! Bot backend, admin API and business logic.
//!
//! This module contains the complete backend: the Discord bot, the HTTP admin API,
//! business logic, data access and infrastructure services. It uses Axum as the web
//! framework, SeaORM for database operations and Serenity for Discord.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Bot Layer** (`bot/`) - Discord event handlers and slash commands
//! - **Service Layer** (`service/`) - Ticket lifecycle, AutoMod and the other operations
//! - **Gateway** (`gateway/`) - Discord channel operations behind a trait
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Admin token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, ticket desk, tokens)
//! - **Startup** (`startup`) - Initialization of database, clients and shared services
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job announcing GitHub releases
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the admin token, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data and Discord operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//!
//! Slash commands take the same path from step 3 on, entering through `bot/`.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
