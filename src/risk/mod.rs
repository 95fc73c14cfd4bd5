//! Risk scoring: per-clause pattern matching, the contract-level aggregate
//! and the vague-language scan.

pub mod aggregate;
pub mod ambiguity;
pub mod engine;
pub mod patterns;
