//! Event-driven view controller.
//!
//! # Responsibility
//! - Map discrete user actions onto directory mutations and render plans.
//! - Own the UI state: edit mode, pending delete, active overlay, query.
//!
//! # Invariants
//! - One action is handled to completion before the next is dispatched.
//! - Validation failures surface as notices; no record is created or
//!   changed when any check fails.

pub mod action;
pub mod dispatch;
pub mod overlay;
pub mod render;
