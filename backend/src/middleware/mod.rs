//! Request middleware for the Cleanstock backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
