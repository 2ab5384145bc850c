//! ShelfSwap application orchestration layer.
//!
//! One use case per user-visible operation, plus the reconciliation engine
//! both handshake roles share. Use cases talk to the outside world only
//! through the ports defined in `ss-core`.

pub mod reconcile;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use reconcile::ReconciliationEngine;
pub use usecases::handshake::{
    AcceptTransactionUseCase, BeginTransactionUseCase, HandBackOutcome, LoadTransactionUseCase,
    PollOutcome, PollTransactionResultUseCase, WatchReturnHandBackUseCase,
};
pub use usecases::scan::{RouteScannedCodeUseCase, ScanRoute};
