//! Render plans produced by the dispatcher.
//!
//! # Responsibility
//! - Describe what the UI surface should show after handling one action.
//!
//! # Invariants
//! - Rows carry positions in the full unfiltered list.
//! - The empty state suppresses scrolling; scrolling engages above the
//!   fixed row threshold with a fixed maximum height.

use crate::controller::overlay::OverlayView;
use crate::model::student::Student;
use crate::search::filter::FilterHit;

/// Rows shown before the table gains a vertical scrollbar.
pub const SCROLL_THRESHOLD: usize = 5;
/// Fixed maximum table height once scrolling engages, in pixels.
pub const SCROLL_MAX_HEIGHT: u32 = 400;

/// Submit button label in add mode.
pub const SAVE_LABEL: &str = "Save Student";
/// Submit button label in edit mode.
pub const UPDATE_LABEL: &str = "Update Student";

/// One visible table row, keyed to the unfiltered record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    /// Index into the full record list; edit/delete actions use this key.
    pub index: usize,
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    /// Class label, `-` when the record has none.
    pub class: String,
}

impl RenderRow {
    pub fn from_hit(hit: &FilterHit<'_>) -> Self {
        Self {
            index: hit.index,
            id: hit.student.id.clone(),
            name: hit.student.name.clone(),
            email: hit.student.email.clone(),
            contact: hit.student.contact.clone(),
            class: hit.student.class_or_dash().to_string(),
        }
    }
}

/// What the registration form should do after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormDirective {
    /// Leave current form contents alone.
    #[default]
    Keep,
    /// Clear all fields.
    Reset,
    /// Fill fields from an existing record for editing.
    Fill(Student),
}

/// Full rendering instruction for one handled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Rows to display, already filtered.
    pub rows: Vec<RenderRow>,
    /// Count of displayed records.
    pub shown: usize,
    /// True when zero rows are shown; suppresses scrolling.
    pub empty_state: bool,
    /// `Some(max_height)` when the table should scroll vertically.
    pub scroll: Option<u32>,
    pub submit_label: &'static str,
    /// Synchronous user notice (validation failure, rejection, confirmation).
    pub notice: Option<String>,
    /// Blocking confirmation prompt; answer arrives as the next action.
    pub confirm: Option<&'static str>,
    pub form: FormDirective,
    /// Currently open overlay, if any.
    pub overlay: Option<OverlayView>,
}

impl RenderPlan {
    /// Builds a table plan from filter hits, deriving the empty-state and
    /// scroll flags from the row count.
    pub fn table(hits: &[FilterHit<'_>], submit_label: &'static str) -> Self {
        let rows: Vec<RenderRow> = hits.iter().map(RenderRow::from_hit).collect();
        let shown = rows.len();
        let scroll = (shown > SCROLL_THRESHOLD).then_some(SCROLL_MAX_HEIGHT);
        Self {
            rows,
            shown,
            empty_state: shown == 0,
            scroll,
            submit_label,
            notice: None,
            confirm: None,
            form: FormDirective::Keep,
            overlay: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn with_form(mut self, form: FormDirective) -> Self {
        self.form = form;
        self
    }
}
