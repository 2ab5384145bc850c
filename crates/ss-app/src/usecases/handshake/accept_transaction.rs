use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ss_core::ids::ShareId;
use ss_core::ports::{MediatorPort, SessionPort, UserRepositoryPort};
use ss_core::{HandshakeError, TransactionOutcome};

use crate::reconcile::ReconciliationEngine;

/// Consumes a scanned hand-off token as the accepting party.
///
/// Calls the mediator's accept operation exactly once per invocation; a
/// repeated tap must be prevented by the caller (disable the control while
/// a call is in flight), nothing here deduplicates concurrent calls. On
/// success the ledger is reconciled before success is reported, so the
/// local records are never observably behind a "done" screen.
pub struct AcceptTransactionUseCase {
    mediator: Arc<dyn MediatorPort>,
    users: Arc<dyn UserRepositoryPort>,
    session: Arc<dyn SessionPort>,
    reconciler: Arc<ReconciliationEngine>,
}

impl AcceptTransactionUseCase {
    pub fn new(
        mediator: Arc<dyn MediatorPort>,
        users: Arc<dyn UserRepositoryPort>,
        session: Arc<dyn SessionPort>,
        reconciler: Arc<ReconciliationEngine>,
    ) -> Self {
        Self {
            mediator,
            users,
            session,
            reconciler,
        }
    }

    pub async fn execute(&self, share_id: &ShareId) -> Result<TransactionOutcome, HandshakeError> {
        let span = info_span!("usecase.handshake.accept", share_id = %share_id);

        async move {
            let user_id = self.session.current_user_id();
            let borrower = self
                .users
                .find_by_id(&user_id)
                .await?
                .ok_or(HandshakeError::IncompleteProfile)?;
            if !borrower.is_complete() {
                warn!("profile missing contact fields, refusing to contact mediator");
                return Err(HandshakeError::IncompleteProfile);
            }

            let outcome = self.mediator.accept(share_id, &borrower).await?;

            // Ledger first: success must never be reported while the local
            // records still show the old custody.
            self.reconciler.apply_acceptor_side(&outcome).await?;
            info!(action = %outcome.action, "transaction accepted");
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
