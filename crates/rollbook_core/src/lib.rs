//! Core domain logic for rollbook, a local student record manager.
//! This crate is the single source of truth for record invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use controller::action::Action;
pub use controller::dispatch::{Controller, DELETE_PROMPT};
pub use controller::overlay::{
    overlay_view, submit_contact, ContactFormError, ContactInput, OverlayKind, OverlayView,
    CONTACT_CONFIRMATION,
};
pub use controller::render::{
    FormDirective, RenderPlan, RenderRow, SAVE_LABEL, SCROLL_MAX_HEIGHT, SCROLL_THRESHOLD,
    UPDATE_LABEL,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{FormInput, Student, StudentValidationError};
pub use repo::record_store::{KvRecordStore, RecordStore, StoreError, StoreResult, RECORDS_KEY};
pub use search::filter::{filter_students, FilterHit};
pub use service::directory::{DirectoryError, DirectoryResult, StudentDirectory};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
