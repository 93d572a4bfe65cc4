//! pgc-core - Core library for pgcopy
//!
//! This crate provides the shared types, layered configuration resolution,
//! and foreign-key graph logic used across all pgcopy components.

pub mod config;
pub mod error;
pub mod graph;
mod newtype_string;
pub mod sql_utils;
pub mod table_name;
pub mod trigger_name;

pub use config::{Config, ConfigOverrides};
pub use error::CoreError;
pub use graph::{FkEdge, TableGraph};
pub use table_name::TableName;
pub use trigger_name::TriggerName;
