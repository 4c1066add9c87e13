//! This module acts as a central hub for all database-related logic.
//! `codes` holds the store trait and the PostgreSQL implementation, `memory`
//! an in-process implementation with identical semantics.

pub mod codes;
pub mod init;
pub mod memory;
pub mod models;

pub use codes::{CodeStore, PgCodeStore};
pub use memory::MemoryCodeStore;
pub use models::{CodeRecord, CodeSummary};
