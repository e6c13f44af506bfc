//! Use-case services over the record store.
//!
//! # Responsibility
//! - Orchestrate validation, uniqueness checks, and persistence into
//!   directory-level operations.
//! - Keep UI layers decoupled from storage details.

pub mod directory;
