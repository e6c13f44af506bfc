//! Dispatch table mapping user actions to handlers.
//!
//! # Responsibility
//! - Hold the view controller state: directory, edit mode, pending delete,
//!   search query, and open overlay.
//! - Handle each action to completion and produce one render plan.
//!
//! # Invariants
//! - Input rejections become notices; the record list is untouched.
//! - Store I/O failures propagate to the caller as typed errors.
//! - A confirmed delete at the active edit index clears edit mode and
//!   resets the form.

use crate::controller::action::Action;
use crate::controller::overlay::{overlay_view, submit_contact, OverlayKind};
use crate::controller::render::{FormDirective, RenderPlan, SAVE_LABEL, UPDATE_LABEL};
use crate::model::student::{FormInput, Student};
use crate::repo::record_store::{RecordStore, StoreResult};
use crate::service::directory::{DirectoryError, DirectoryResult, StudentDirectory};

/// Blocking prompt shown before a delete is applied.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Event-driven view controller over the student directory.
pub struct Controller<S: RecordStore> {
    directory: StudentDirectory<S>,
    /// Present = edit mode; submit overwrites the record at this index.
    edit_index: Option<usize>,
    /// Delete awaiting synchronous confirmation.
    pending_delete: Option<usize>,
    query: String,
    open_overlay: Option<OverlayKind>,
}

impl<S: RecordStore> Controller<S> {
    /// Loads the persisted records and starts in add mode with no overlay.
    pub fn open(store: S) -> StoreResult<Self> {
        Ok(Self {
            directory: StudentDirectory::open(store)?,
            edit_index: None,
            pending_delete: None,
            query: String::new(),
            open_overlay: None,
        })
    }

    pub fn directory(&self) -> &StudentDirectory<S> {
        &self.directory
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    /// Handles one user action to completion.
    ///
    /// Validation and uniqueness rejections are reported in the returned
    /// plan's notice; only store I/O failures surface as `Err`.
    pub fn dispatch(&mut self, action: Action) -> DirectoryResult<RenderPlan> {
        match action {
            Action::Submit(input) => self.handle_submit(input),
            Action::Search(query) => {
                self.query = query;
                Ok(self.view())
            }
            Action::EditRequested(index) => self.handle_edit_request(index),
            Action::DeleteRequested(index) => self.handle_delete_request(index),
            Action::DeleteConfirmed => self.handle_delete_confirmed(),
            Action::DeleteCancelled => {
                self.pending_delete = None;
                Ok(self.view())
            }
            Action::OpenOverlay(kind) => {
                self.open_overlay = Some(kind);
                Ok(self.view())
            }
            Action::CloseOverlay | Action::ClickOutsideOverlay => {
                self.open_overlay = None;
                Ok(self.view())
            }
            Action::SubmitContact(input) => {
                if self.open_overlay != Some(OverlayKind::Contact) {
                    return Ok(self.view().with_notice("the contact form is not open"));
                }
                match submit_contact(&input) {
                    Ok(confirmation) => {
                        self.open_overlay = None;
                        Ok(self.view().with_notice(confirmation))
                    }
                    Err(err) => Ok(self.view().with_notice(err.to_string())),
                }
            }
        }
    }

    fn handle_submit(&mut self, input: FormInput) -> DirectoryResult<RenderPlan> {
        let student = match Student::from_input(&input) {
            Ok(student) => student,
            Err(err) => return Ok(self.view().with_notice(err.to_string())),
        };

        let result = match self.edit_index {
            Some(index) => self.directory.update(index, student),
            None => self.directory.add(student),
        };

        match result {
            Ok(()) => {
                self.edit_index = None;
                // Mutations re-render the full unfiltered list.
                self.query.clear();
                Ok(self.view().with_form(FormDirective::Reset))
            }
            Err(DirectoryError::Store(err)) => Err(DirectoryError::Store(err)),
            Err(err) => Ok(self.view().with_notice(err.to_string())),
        }
    }

    fn handle_edit_request(&mut self, index: usize) -> DirectoryResult<RenderPlan> {
        let Some(student) = self.directory.get(index).cloned() else {
            return Ok(self
                .view()
                .with_notice(format!("no record at index {index}")));
        };

        self.edit_index = Some(index);
        Ok(self.view().with_form(FormDirective::Fill(student)))
    }

    fn handle_delete_request(&mut self, index: usize) -> DirectoryResult<RenderPlan> {
        if self.directory.get(index).is_none() {
            return Ok(self
                .view()
                .with_notice(format!("no record at index {index}")));
        }

        self.pending_delete = Some(index);
        let mut plan = self.view();
        plan.confirm = Some(DELETE_PROMPT);
        Ok(plan)
    }

    fn handle_delete_confirmed(&mut self) -> DirectoryResult<RenderPlan> {
        let Some(index) = self.pending_delete.take() else {
            return Ok(self.view());
        };

        match self.directory.remove(index) {
            Ok(_removed) => {
                let mut form = FormDirective::Keep;
                match self.edit_index {
                    // Deleting the record being edited abandons the edit.
                    Some(editing) if editing == index => {
                        self.edit_index = None;
                        form = FormDirective::Reset;
                    }
                    // Later records shift down by one; keep tracking the
                    // same record.
                    Some(editing) if editing > index => {
                        self.edit_index = Some(editing - 1);
                    }
                    _ => {}
                }
                self.query.clear();
                Ok(self.view().with_form(form))
            }
            Err(DirectoryError::Store(err)) => Err(DirectoryError::Store(err)),
            Err(err) => Ok(self.view().with_notice(err.to_string())),
        }
    }

    fn view(&self) -> RenderPlan {
        let hits = self.directory.filter(&self.query);
        let label = if self.edit_index.is_some() {
            UPDATE_LABEL
        } else {
            SAVE_LABEL
        };
        let mut plan = RenderPlan::table(&hits, label);
        plan.overlay = self.open_overlay.map(overlay_view);
        plan
    }
}
