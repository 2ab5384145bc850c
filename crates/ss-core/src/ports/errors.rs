use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediatorError {
    #[error("mediator unavailable: {0}")]
    Unavailable(String),

    #[error("unknown share id")]
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("storage error: {0}")]
    Storage(String),
}
