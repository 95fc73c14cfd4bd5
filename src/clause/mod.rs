//! Clause type classification.
//!
//! - [`taxonomy`] — ordered keyword rules per [`ClauseType`](crate::models::ClauseType),
//!   English and Devanagari.
//! - [`classifier`] — first-match-wins evaluation of those rules, with a
//!   multilingual variant that also checks the normalized clause.

pub mod classifier;
pub mod taxonomy;
