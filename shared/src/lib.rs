//! Shared domain types and rules for the Cleanstock platform
//!
//! This crate contains the enums, workflow rules, and validation logic
//! shared between the backend and other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
