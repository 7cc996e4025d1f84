//! Domain models for the Cleanstock backend
//!
//! Re-exports the shared enums and workflow rules

pub use shared::models::*;
