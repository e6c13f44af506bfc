//! Case-insensitive substring filter over student records.
//!
//! # Responsibility
//! - Match a query against id, name, email, and contact fields.
//! - Preserve each hit's position in the full unfiltered list so edit and
//!   delete actions key to the underlying store.

use crate::model::student::Student;

/// One filter match, addressed by its position in the unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterHit<'a> {
    /// Index into the full record list.
    pub index: usize,
    pub student: &'a Student,
}

/// Returns the subsequence of records containing `query` as a
/// case-insensitive substring of id, name, email, or contact.
///
/// A blank query matches every record. The `class` and `address` fields are
/// intentionally not searched.
pub fn filter_students<'a>(records: &'a [Student], query: &str) -> Vec<FilterHit<'a>> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, student)| matches_query(student, &needle))
        .map(|(index, student)| FilterHit { index, student })
        .collect()
}

fn matches_query(student: &Student, needle: &str) -> bool {
    student.id.to_lowercase().contains(needle)
        || student.name.to_lowercase().contains(needle)
        || student.email.to_lowercase().contains(needle)
        || student.contact.to_lowercase().contains(needle)
}
