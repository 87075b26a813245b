//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(DomainError::InvalidKeyBindings { .. }) => {
                    crate::exitcode::CONFIG
                }
                ApplicationError::Domain(DomainError::OutOfMemory { .. }) => {
                    crate::exitcode::OSERR
                }
            },
        }
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn out_of_memory() -> DomainError {
        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        DomainError::OutOfMemory {
            what: "visit log",
            source,
        }
    }

    #[rstest]
    #[case(CliError::Usage("bad".into()), crate::exitcode::USAGE)]
    #[case(CliError::from(out_of_memory()), crate::exitcode::OSERR)]
    #[case(
        CliError::from(DomainError::InvalidKeyBindings { reason: "same".into() }),
        crate::exitcode::CONFIG
    )]
    #[case(
        CliError::from(ApplicationError::Config { message: "parse".into() }),
        crate::exitcode::CONFIG
    )]
    #[case(
        CliError::from(ApplicationError::io("print", std::io::Error::other("closed"))),
        crate::exitcode::IOERR
    )]
    fn exit_code_per_error(#[case] err: CliError, #[case] expected: i32) {
        assert_eq!(err.exit_code(), expected);
    }
}
