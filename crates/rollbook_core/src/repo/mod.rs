//! Record store abstraction and key-value persistence implementation.
//!
//! # Responsibility
//! - Define the load/save contract for the persisted record list.
//! - Isolate SQLite key-value details from service orchestration.
//!
//! # Invariants
//! - The whole record list is rewritten on every save; last write wins.
//! - A missing or unreadable persisted value loads as an empty list.

pub mod record_store;
