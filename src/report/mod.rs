//! Report shaping and rendering for contract analyses.
//!
//! - [`sections`] — business-owner report as plain data (summary, warnings,
//!   advice), shared by every output format.
//! - [`terminal`] — colored, tabular output with summary box; respects `--verbose` / `--quiet`.

pub mod sections;
pub mod terminal;
