use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use ss_core::ids::BookId;
use ss_core::ports::BookRepositoryPort;
use ss_core::{HandshakeError, PollConfig};

/// How the hand-back watch ended, short of timing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandBackOutcome {
    /// The custody marker is gone; the book is back on the shelf (or the
    /// record was dropped by the main return flow).
    Confirmed,
    /// The owning scope tore the watcher down.
    Cancelled,
}

/// Confirmation-only watcher kept for the legacy return screen.
///
/// The current flow drives returns through the mediator poll loop; this
/// one only watches the local ledger until reconciliation clears the
/// custody marker or removes the record. Same cancellation and ceiling
/// discipline as the main loop, on its own slower cadence.
pub struct WatchReturnHandBackUseCase {
    books: Arc<dyn BookRepositoryPort>,
    config: PollConfig,
}

impl WatchReturnHandBackUseCase {
    pub fn new(books: Arc<dyn BookRepositoryPort>, config: PollConfig) -> Self {
        Self { books, config }
    }

    pub async fn execute(
        &self,
        book_id: &BookId,
        cancel: CancellationToken,
    ) -> Result<HandBackOutcome, HandshakeError> {
        let span = info_span!("usecase.handshake.watch_hand_back", book_uid = %book_id);

        async move {
            let interval = Duration::from_millis(self.config.confirm_interval_ms);

            for attempt in 1..=self.config.confirm_max_attempts {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(attempt, "hand-back watch cancelled by owning scope");
                        return Ok(HandBackOutcome::Cancelled);
                    }
                    _ = sleep(interval) => {}
                }

                match self.books.find_by_id(book_id).await {
                    Ok(None) => {
                        info!(attempt, "book record gone, hand-back confirmed");
                        return Ok(HandBackOutcome::Confirmed);
                    }
                    Ok(Some(book)) if book.holder_id.is_none() => {
                        info!(attempt, "custody marker cleared, hand-back confirmed");
                        return Ok(HandBackOutcome::Confirmed);
                    }
                    Ok(Some(_)) => {
                        debug!(attempt, "still waiting for the hand-back");
                    }
                    // The ledger may be briefly unavailable; the tick still counts.
                    Err(err) => {
                        debug!(attempt, %err, "hand-back watch tick failed");
                    }
                }
            }

            warn!(
                max_attempts = self.config.confirm_max_attempts,
                "hand-back watch ceiling reached"
            );
            Err(HandshakeError::TransactionTimeout)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryBookRepository;
    use ss_core::ids::UserId;
    use ss_core::Book;

    fn lent_book(uid: &str) -> Book {
        Book {
            uid: BookId::from(uid),
            isbn: "isbn".to_string(),
            title: "title".to_string(),
            authors: None,
            cover_url: None,
            holder_id: Some(UserId::from("borrower")),
            owner_id: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn confirms_once_the_record_is_gone() {
        let books = Arc::new(InMemoryBookRepository::default());
        books.insert(lent_book("b-1"));
        let usecase = WatchReturnHandBackUseCase::new(books.clone(), PollConfig::default());

        let watcher = tokio::spawn({
            let usecase = Arc::new(usecase);
            let cancel = CancellationToken::new();
            async move { usecase.execute(&BookId::from("b-1"), cancel).await }
        });

        // Let a few ticks observe the still-lent record, then drop it.
        tokio::time::sleep(Duration::from_secs(5)).await;
        books.remove("b-1");

        let outcome = watcher.await.unwrap().unwrap();
        assert_eq!(outcome, HandBackOutcome::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn confirms_when_the_custody_marker_clears() {
        let books = Arc::new(InMemoryBookRepository::default());
        books.insert(Book {
            holder_id: None,
            ..lent_book("b-1")
        });
        let usecase = WatchReturnHandBackUseCase::new(books, PollConfig::default());

        let outcome = usecase
            .execute(&BookId::from("b-1"), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, HandBackOutcome::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_after_the_confirm_ceiling() {
        let books = Arc::new(InMemoryBookRepository::default());
        books.insert(lent_book("b-1"));
        let usecase = WatchReturnHandBackUseCase::new(books, PollConfig::default());

        let err = usecase
            .execute(&BookId::from("b-1"), CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, HandshakeError::TransactionTimeout);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_the_watch() {
        let books = Arc::new(InMemoryBookRepository::default());
        books.insert(lent_book("b-1"));
        let usecase = WatchReturnHandBackUseCase::new(books, PollConfig::default());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = usecase
            .execute(&BookId::from("b-1"), cancel)
            .await
            .unwrap();
        assert_eq!(outcome, HandBackOutcome::Cancelled);
    }
}
