//! pgc-db - Database abstraction layer for pgcopy
//!
//! This crate provides the `Database` trait and the PostgreSQL
//! implementation backed by an sqlx connection pool.

pub mod error;
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::PostgresBackend;
pub use traits::{CopyStream, Database, TriggerRef};
