//! Student directory service.
//!
//! # Responsibility
//! - Own the in-memory record list loaded once at startup.
//! - Mirror the full list to the record store after every mutation.
//!
//! # Invariants
//! - `id` stays unique across all records; violating writes are rejected
//!   before any mutation.
//! - Validation runs before every write; invalid records never persist.
//! - Reads never touch the store; the in-memory list is authoritative.

use crate::model::student::{Student, StudentValidationError};
use crate::repo::record_store::{RecordStore, StoreError, StoreResult};
use crate::search::filter::{filter_students, FilterHit};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory-level error for record mutations.
#[derive(Debug)]
pub enum DirectoryError {
    Validation(StudentValidationError),
    /// Another record already carries this id.
    DuplicateId(String),
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    Store(StoreError),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "student id `{id}` already exists"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for {len} records")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::IndexOutOfRange { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for DirectoryError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for DirectoryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Owned repository over the record list.
///
/// Holds the only mutable copy of the records; every mutation is followed
/// by a wholesale save so the persisted mirror never drifts.
pub struct StudentDirectory<S: RecordStore> {
    store: S,
    records: Vec<Student>,
}

impl<S: RecordStore> StudentDirectory<S> {
    /// Loads the persisted record list and takes ownership of the store.
    pub fn open(store: S) -> StoreResult<Self> {
        let records = store.load()?;
        info!(
            "event=directory_open module=service status=ok records={}",
            records.len()
        );
        Ok(Self { store, records })
    }

    /// Appends a new record after validation and the uniqueness check.
    pub fn add(&mut self, student: Student) -> DirectoryResult<()> {
        student.validate()?;
        if self.records.iter().any(|r| r.id == student.id) {
            return Err(DirectoryError::DuplicateId(student.id));
        }

        let id = student.id.clone();
        self.records.push(student);
        self.persist()?;
        info!("event=record_added module=service status=ok id={id}");
        Ok(())
    }

    /// Overwrites the record at `index` in place.
    ///
    /// Rejects an id change that would collide with a different record, so
    /// the uniqueness invariant holds across edits as well as inserts.
    pub fn update(&mut self, index: usize, student: Student) -> DirectoryResult<()> {
        self.check_bounds(index)?;
        student.validate()?;
        let collision = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.id == student.id);
        if collision {
            return Err(DirectoryError::DuplicateId(student.id));
        }

        let id = student.id.clone();
        self.records[index] = student;
        self.persist()?;
        info!("event=record_updated module=service status=ok index={index} id={id}");
        Ok(())
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> DirectoryResult<Student> {
        self.check_bounds(index)?;
        let removed = self.records.remove(index);
        self.persist()?;
        info!(
            "event=record_removed module=service status=ok index={index} id={}",
            removed.id
        );
        Ok(removed)
    }

    /// Gets the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.records.get(index)
    }

    /// Finds a record by exact id, with its position in the full list.
    pub fn find_by_id(&self, id: &str) -> Option<(usize, &Student)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, student)| student.id == id)
    }

    /// Display-only filter over id, name, email, and contact.
    pub fn filter(&self, query: &str) -> Vec<FilterHit<'_>> {
        filter_students(&self.records, query)
    }

    /// Full record list in insertion order.
    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_bounds(&self, index: usize) -> DirectoryResult<()> {
        if index >= self.records.len() {
            return Err(DirectoryError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.records)
    }
}
