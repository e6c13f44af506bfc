//! Domain model for student records.
//!
//! # Responsibility
//! - Define the canonical record persisted by the record store.
//! - Validate raw form input before any mutation is attempted.
//!
//! # Invariants
//! - Required fields are validated over trimmed input.
//! - Optional fields (`class`, `address`) carry no format constraint.

pub mod student;
