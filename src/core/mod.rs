//! Error types shared by the command line and the driver.

pub mod error;

pub use error::{ErrorContext, JppError, user_friendly_error};
