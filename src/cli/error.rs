//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::Domain(e).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use crate::exitcode;

        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(InfraError::Io { .. }) => exitcode::IOERR,
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => exitcode::IOERR,
                ApplicationError::Domain(DomainError::ReleaseNotFound(_)) => exitcode::NOINPUT,
                ApplicationError::Domain(DomainError::InvalidRelease(_)) => exitcode::DATAERR,
                ApplicationError::Domain(DomainError::MissingTemplates(_)) => exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommandFamily;

    #[test]
    fn given_domain_errors_when_exit_code_then_maps_to_sysexits() {
        let not_found: CliError = DomainError::ReleaseNotFound("Arch".into()).into();
        let invalid: CliError = DomainError::InvalidRelease("bad".into()).into();
        let missing: CliError = DomainError::MissingTemplates(CommandFamily::Docker).into();

        assert_eq!(not_found.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(invalid.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(missing.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_not_found_when_displayed_then_names_distribution() {
        let err: CliError = DomainError::ReleaseNotFound("Arch".into()).into();
        assert_eq!(err.to_string(), "Linux distribution 'Arch' not found");
    }

    #[test]
    fn given_usage_error_when_exit_code_then_usage() {
        assert_eq!(
            CliError::InvalidArgs("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
