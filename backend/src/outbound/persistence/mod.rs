//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: repositories translate between row structs and
//!   domain types. Business rules stay in the domain.
//! - **Internal models**: `models.rs` and `schema.rs` never leak out of this
//!   module.
//! - **Atomic toggles**: bookmark and reaction toggles lock the target row
//!   and run inside one transaction.
//!
//! # Example
//!
//! ```ignore
//! use yourside::outbound::persistence::{DbPool, DieselPostingRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/yourside")).await?;
//! let postings = DieselPostingRepository::new(pool);
//! ```

mod diesel_bookmark_repository;
mod diesel_comment_reaction_repository;
mod diesel_comment_repository;
mod diesel_error_mapping;
mod diesel_posting_repository;
mod diesel_user_repository;
mod diesel_worksheet_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_bookmark_repository::DieselBookmarkRepository;
pub use diesel_comment_reaction_repository::DieselCommentReactionRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_posting_repository::DieselPostingRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_worksheet_repository::DieselWorksheetRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
