use crate::handshake::TransactionAction;
use crate::library::{Book, UserProfile};

/// What the initiating device proposes to the mediator.
///
/// Created once, sent once on `init`, never mutated afterward; only the
/// mediator's stored copy of the transaction evolves from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIntent {
    pub action: TransactionAction,
    pub book: Book,
    pub owner: UserProfile,
}

impl TransactionIntent {
    /// Builds the snapshot sent to the mediator.
    ///
    /// For a return the custody marker is cleared before transmission: the
    /// mediator only records that the owner of record initiated one.
    pub fn new(action: TransactionAction, book: Book, owner: UserProfile) -> Self {
        let book = match action {
            TransactionAction::Loan => book,
            TransactionAction::Return => book.with_holder_cleared(),
        };
        Self {
            action,
            book,
            owner,
        }
    }
}
