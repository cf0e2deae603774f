//! Core types shared by every pomdep module.
//!
//! Currently this is the error system: [`PomdepError`] for typed failures and
//! [`ErrorContext`] / [`user_friendly_error`] for CLI display.

pub mod error;

pub use error::{ErrorContext, PomdepError, user_friendly_error};

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, PomdepError>;
