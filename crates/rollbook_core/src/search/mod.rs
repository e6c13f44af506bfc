//! Display-only record filtering.
//!
//! # Responsibility
//! - Select the subsequence of records matching a free-text query.
//!
//! # Invariants
//! - Filtering never mutates the underlying record list.
//! - Hits carry positions in the full unfiltered list.

pub mod filter;
