//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: mutex-guarded tables for local runs and tests
//!
//! Adapters translate between domain types and storage representations.
//! They contain no business rules beyond the atomic toggle write.

pub mod memory;
pub mod persistence;
