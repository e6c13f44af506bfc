//! User actions understood by the dispatcher.
//!
//! Each variant corresponds to one discrete user interaction; the dispatch
//! table in [`crate::controller::dispatch`] maps every variant to exactly
//! one handler.

use crate::controller::overlay::{ContactInput, OverlayKind};
use crate::model::student::FormInput;

/// One user interaction, handled to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Registration form submitted; adds or updates depending on edit mode.
    Submit(FormInput),
    /// Search text changed or the search button was used.
    Search(String),
    /// Edit button pressed for the record at this unfiltered index.
    EditRequested(usize),
    /// Delete button pressed for the record at this unfiltered index.
    DeleteRequested(usize),
    /// The pending delete was confirmed.
    DeleteConfirmed,
    /// The pending delete was declined.
    DeleteCancelled,
    /// Footer link opened an overlay.
    OpenOverlay(OverlayKind),
    /// Explicit close control of the open overlay.
    CloseOverlay,
    /// Click landed outside the open overlay's content area.
    ClickOutsideOverlay,
    /// Contact form submitted inside the contact overlay.
    SubmitContact(ContactInput),
}
