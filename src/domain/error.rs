//! Domain-level errors (no external dependencies)

use std::collections::TryReserveError;
use thiserror::Error;

/// Domain errors represent conditions the game cannot continue from.
/// These are independent of console and configuration concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("out of memory while growing {what}")]
    OutOfMemory {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid key bindings: {reason}")]
    InvalidKeyBindings { reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
