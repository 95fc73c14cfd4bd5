//! Script detection and Hindi → English normalization.
//!
//! - [`detector`] — Devanagari character ratios and closed keyword counts
//!   producing a [`LanguageProfile`](crate::models::LanguageProfile).
//! - [`normalizer`] — digit, currency/percentage and dictionary rewrites so
//!   English-keyed pattern tables can run over Hindi clauses.
//! - [`dictionary`] — the closed Hindi legal vocabulary.

pub mod detector;
pub mod dictionary;
pub mod normalizer;
