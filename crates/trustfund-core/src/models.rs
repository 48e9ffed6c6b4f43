//! Domain models for the TrustFund client core.
//!
//! These are the core types shared across all crates.

pub mod donation;
pub mod request;
pub mod user;
