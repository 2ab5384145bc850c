use std::sync::Arc;

use tracing::{debug, info, warn};

use ss_core::ids::BookId;
use ss_core::ports::{BookRepositoryPort, LedgerError, UserRepositoryPort};
use ss_core::{TransactionAction, TransactionOutcome};

/// Applies an agreed outcome to the local ledger.
///
/// Shared by both handshake roles; which entry point runs depends on the
/// role this device played. Both are idempotent, and both tolerate a
/// locally-absent book record: the ledger may have silently diverged from
/// the mediator before the handshake began, and the transaction still
/// succeeded from the mediator's point of view, so a missing row is logged
/// and skipped rather than failed.
pub struct ReconciliationEngine {
    books: Arc<dyn BookRepositoryPort>,
    users: Arc<dyn UserRepositoryPort>,
}

impl ReconciliationEngine {
    pub fn new(books: Arc<dyn BookRepositoryPort>, users: Arc<dyn UserRepositoryPort>) -> Self {
        Self { books, users }
    }

    /// Acceptor side, run immediately after a successful accept.
    ///
    /// Loan: record the borrowed copy with ourselves as holder and the
    /// initiating party as owner of record, and cache the owner's profile.
    /// Return: drop our record of the borrowed copy.
    pub async fn apply_acceptor_side(
        &self,
        outcome: &TransactionOutcome,
    ) -> Result<(), LedgerError> {
        let Some(borrower) = &outcome.borrower else {
            warn!(book_uid = %outcome.book.uid, "outcome has no accepting party, nothing to reconcile");
            return Ok(());
        };

        match outcome.action {
            TransactionAction::Loan => {
                let mut book = outcome.book.clone();
                book.holder_id = Some(borrower.uid.clone());
                book.owner_id = Some(outcome.owner.uid.clone());
                self.books.save(book).await?;
                self.users.save(outcome.owner.clone()).await?;
                info!(book_uid = %outcome.book.uid, owner = %outcome.owner.uid, "borrowed copy recorded");
            }
            TransactionAction::Return => {
                self.remove_book(&outcome.book.uid).await?;
            }
        }
        Ok(())
    }

    /// Initiator side, run when the poll loop observes resolution.
    ///
    /// Loan: mark our copy as held by the accepting party and cache their
    /// profile. Return: drop the record entirely; the custody marker goes
    /// with it once the holder confirmed the hand-back.
    pub async fn apply_initiator_side(
        &self,
        outcome: &TransactionOutcome,
    ) -> Result<(), LedgerError> {
        let Some(borrower) = &outcome.borrower else {
            warn!(book_uid = %outcome.book.uid, "outcome has no accepting party, nothing to reconcile");
            return Ok(());
        };

        match outcome.action {
            TransactionAction::Loan => {
                match self.books.find_by_id(&outcome.book.uid).await? {
                    Some(mut local) => {
                        local.holder_id = Some(borrower.uid.clone());
                        self.books.save(local).await?;
                        info!(book_uid = %outcome.book.uid, holder = %borrower.uid, "custody handed to borrower");
                    }
                    None => {
                        warn!(book_uid = %outcome.book.uid, "no matching book in the local ledger, skipping custody update");
                    }
                }
                self.users.save(borrower.clone()).await?;
            }
            TransactionAction::Return => {
                self.remove_book(&outcome.book.uid).await?;
            }
        }
        Ok(())
    }

    async fn remove_book(&self, uid: &BookId) -> Result<(), LedgerError> {
        match self.books.find_by_id(uid).await? {
            Some(book) => {
                self.books.delete(&book.uid).await?;
                debug!(book_uid = %uid, "book record removed");
            }
            None => {
                warn!(book_uid = %uid, "no matching book in the local ledger, nothing to delete");
            }
        }
        Ok(())
    }
}
