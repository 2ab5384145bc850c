use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use ss_core::ids::ShareId;
use ss_core::ports::MediatorPort;
use ss_core::{HandshakeError, TransactionOutcome};

/// Read-only preview of a transaction, so the accept screen can show what
/// is being offered before the user commits. Mutates nothing.
pub struct LoadTransactionUseCase {
    mediator: Arc<dyn MediatorPort>,
}

impl LoadTransactionUseCase {
    pub fn new(mediator: Arc<dyn MediatorPort>) -> Self {
        Self { mediator }
    }

    pub async fn execute(&self, share_id: &ShareId) -> Result<TransactionOutcome, HandshakeError> {
        let span = info_span!("usecase.handshake.load", share_id = %share_id);

        async move {
            let outcome = self.mediator.result(share_id).await?;
            debug!(action = %outcome.action, accepted = outcome.is_accepted(), "transaction loaded");
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
