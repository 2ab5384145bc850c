use thiserror::Error;

use crate::ports::{LedgerError, MediatorError};

/// Error taxonomy for the handshake layer.
///
/// Every failure crossing a use case boundary is one of these kinds; raw
/// transport or storage errors never reach the caller. The `Display`
/// strings are the user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandshakeError {
    /// The local profile is missing a contact field.
    #[error("complete your profile (name, phone, email) before making a transaction")]
    IncompleteProfile,

    /// The mediator could not be reached or answered with a server error.
    #[error("the lending service is unreachable, try again later: {0}")]
    MediatorUnavailable(String),

    /// The hand-off token is unknown to the mediator.
    #[error("this transaction is unknown to the lending service")]
    NotFound,

    /// The scanned code did not match any known payload shape.
    #[error("code not recognized, scan it again")]
    NotRecognized,

    /// The other party never confirmed before the poll ceiling.
    #[error("the other party did not confirm the transaction in time")]
    TransactionTimeout,

    /// The local ledger failed underneath a use case.
    #[error("local library storage failed: {0}")]
    Ledger(String),
}

impl HandshakeError {
    /// Whether the user can fix this themselves (edit profile, re-scan)
    /// rather than trying again later.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            HandshakeError::IncompleteProfile | HandshakeError::NotRecognized
        )
    }
}

impl From<MediatorError> for HandshakeError {
    fn from(err: MediatorError) -> Self {
        match err {
            MediatorError::Unavailable(reason) => HandshakeError::MediatorUnavailable(reason),
            MediatorError::NotFound => HandshakeError::NotFound,
        }
    }
}

impl From<LedgerError> for HandshakeError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Storage(reason) => HandshakeError::Ledger(reason),
        }
    }
}
