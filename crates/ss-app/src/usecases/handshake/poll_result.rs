use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use ss_core::ids::ShareId;
use ss_core::ports::MediatorPort;
use ss_core::{
    HandshakeError, PollConfig, ResolutionTracker, TransactionAction, TransactionOutcome,
};

use crate::reconcile::ReconciliationEngine;

/// How a poll loop ended, short of timing out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The other party confirmed; initiator-side reconciliation has run.
    Resolved(TransactionOutcome),
    /// The owning scope tore the loop down before resolution.
    Cancelled,
}

/// The initiator's result poll loop.
///
/// One loop runs per active transaction as a cooperative task: each tick
/// awaits the configured interval, then asks the mediator for the current
/// outcome. A failed tick is swallowed (the result may simply not be ready
/// yet) and only consumes one attempt. The loop ends on resolution, on
/// cancellation from the owning scope (no polling outlives the screen that
/// started it), or with a timeout once the attempt ceiling is reached; the
/// mediator-side record is left as-is in that case.
pub struct PollTransactionResultUseCase {
    mediator: Arc<dyn MediatorPort>,
    reconciler: Arc<ReconciliationEngine>,
    config: PollConfig,
}

impl PollTransactionResultUseCase {
    pub fn new(
        mediator: Arc<dyn MediatorPort>,
        reconciler: Arc<ReconciliationEngine>,
        config: PollConfig,
    ) -> Self {
        Self {
            mediator,
            reconciler,
            config,
        }
    }

    pub async fn execute(
        &self,
        share_id: &ShareId,
        action: TransactionAction,
        cancel: CancellationToken,
    ) -> Result<PollOutcome, HandshakeError> {
        let span = info_span!(
            "usecase.handshake.poll_result",
            share_id = %share_id,
            action = %action,
        );

        async move {
            let interval = Duration::from_millis(self.config.interval_ms);
            let mut tracker = ResolutionTracker::new(action);

            for attempt in 1..=self.config.max_attempts {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(attempt, "poll loop cancelled by owning scope");
                        return Ok(PollOutcome::Cancelled);
                    }
                    _ = sleep(interval) => {}
                }

                match self.mediator.result(share_id).await {
                    Ok(outcome) => {
                        if tracker.observe(&outcome) {
                            self.reconciler.apply_initiator_side(&outcome).await?;
                            info!(attempt, "transaction resolved");
                            return Ok(PollOutcome::Resolved(outcome));
                        }
                        debug!(attempt, accepted = outcome.is_accepted(), "not resolved yet");
                    }
                    Err(err) => {
                        debug!(attempt, %err, "poll tick failed");
                    }
                }
            }

            warn!(
                max_attempts = self.config.max_attempts,
                "poll ceiling reached without resolution"
            );
            Err(HandshakeError::TransactionTimeout)
        }
        .instrument(span)
        .await
    }
}
