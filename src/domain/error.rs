//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::CommandFamily;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No template chain is registered for the family. Programmer error.
    #[error("no command templates configured for: {0}")]
    MissingTemplates(CommandFamily),

    #[error("invalid release record: {0}")]
    InvalidRelease(String),

    #[error("Linux distribution '{0}' not found")]
    ReleaseNotFound(String),
}
