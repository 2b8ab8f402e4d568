//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations translate between Diesel row structs and
//! domain types and nothing more. Row structs and the `table!` schema stay
//! private to this module.
//!
//! ```ignore
//! use card_aggregator::outbound::persistence::{DbPool, DieselCardConfigRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cards")).await?;
//! let repo = DieselCardConfigRepository::new(pool);
//! ```

mod diesel_card_config_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_card_config_repository::DieselCardConfigRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
