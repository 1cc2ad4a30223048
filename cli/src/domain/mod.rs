//! Domain layer — pure types, messages, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod selections;

pub use config::{ToolConfig, validate_program_name};
pub use error::{ConfigError, SelectionsError};
pub use selections::{ApplyOutcome, ApplyRequest, ChangeReport};
