use crate::handshake::TransactionAction;
use crate::library::{Book, UserProfile};

/// The mediator's record of one transaction, as observed by either device.
///
/// `borrower: None` means "not yet accepted". Once the mediator records an
/// accepting party the outcome is immutable; observing it repeatedly must
/// not change what reconciliation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutcome {
    pub action: TransactionAction,
    pub book: Book,
    pub owner: UserProfile,
    pub borrower: Option<UserProfile>,
}

impl TransactionOutcome {
    pub fn is_accepted(&self) -> bool {
        self.borrower.is_some()
    }
}
