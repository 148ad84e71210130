//! Output utilities for CLI commands
//!
//! Spinners for long waits and consistent error formatting for host errors.

pub mod errors;
pub mod spinner;

pub use errors::format_host_error;
pub use spinner::CommandSpinner;
