use async_trait::async_trait;

use crate::handshake::{TransactionIntent, TransactionOutcome};
use crate::ids::ShareId;
use crate::library::UserProfile;
use crate::ports::errors::MediatorError;

/// The mediator's three remote operations.
///
/// The mediator is the only shared resource between the two devices; it is
/// accessed exclusively through this request/response contract and holds
/// the authoritative outcome of every transaction.
#[async_trait]
pub trait MediatorPort: Send + Sync {
    /// Register a transaction intent; returns the hand-off token.
    async fn init(&self, intent: &TransactionIntent) -> Result<ShareId, MediatorError>;

    /// Record the accepting party for a token. The mediator is expected to
    /// reject a second acceptance; no specific rejection shape is assumed.
    async fn accept(
        &self,
        share_id: &ShareId,
        borrower: &UserProfile,
    ) -> Result<TransactionOutcome, MediatorError>;

    /// Read the current outcome for a token.
    async fn result(&self, share_id: &ShareId) -> Result<TransactionOutcome, MediatorError>;
}
