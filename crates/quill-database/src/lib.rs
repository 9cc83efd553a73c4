//! # quill-database
//!
//! PostgreSQL connection management and concrete repository implementations
//! for Quill entities.

pub mod connection;
pub mod migration;
pub mod repositories;
