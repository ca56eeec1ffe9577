//! Common utilities and error types shared across the crate.

pub mod error;
pub mod result;

pub use error::{BomshipError, ExitCode};
pub use result::Result;
