use crate::handshake::{TransactionAction, TransactionOutcome};

/// Decides when the polling initiator may consider a transaction complete.
///
/// A loan resolves as soon as the mediator shows an accepting party. A
/// return must not: the mediator's record can still carry the borrower from
/// the loan being reversed, so a bare presence check would resolve on the
/// very first poll. The tracker therefore remembers what the first
/// successful poll observed and only resolves a return on an
/// absent-to-present transition across later polls.
#[derive(Debug)]
pub struct ResolutionTracker {
    action: TransactionAction,
    first_observed_accepted: Option<bool>,
}

impl ResolutionTracker {
    pub fn new(action: TransactionAction) -> Self {
        Self {
            action,
            first_observed_accepted: None,
        }
    }

    /// Feed one successful poll result; returns whether the transaction is
    /// resolved. Failed polls must not be fed here.
    pub fn observe(&mut self, outcome: &TransactionOutcome) -> bool {
        let accepted = outcome.is_accepted();
        let first = *self.first_observed_accepted.get_or_insert(accepted);

        match self.action {
            TransactionAction::Loan => accepted,
            TransactionAction::Return => !first && accepted,
        }
    }
}
