use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ss_core::ids::{BookId, ShareId};
use ss_core::ports::{BookRepositoryPort, MediatorPort, SessionPort, UserRepositoryPort};
use ss_core::{HandshakeError, TransactionAction, TransactionIntent};

/// Starts a handshake as the initiating party (owner lending out, or owner
/// of record asking for the book back).
///
/// Returns the hand-off token to render for the other device. The owning
/// scope is expected to follow up with [`PollTransactionResultUseCase`]
/// until the other party confirms, and may re-invoke this use case if the
/// mediator was unavailable; nothing here retries automatically.
///
/// [`PollTransactionResultUseCase`]: crate::usecases::handshake::PollTransactionResultUseCase
pub struct BeginTransactionUseCase {
    mediator: Arc<dyn MediatorPort>,
    books: Arc<dyn BookRepositoryPort>,
    users: Arc<dyn UserRepositoryPort>,
    session: Arc<dyn SessionPort>,
}

impl BeginTransactionUseCase {
    pub fn new(
        mediator: Arc<dyn MediatorPort>,
        books: Arc<dyn BookRepositoryPort>,
        users: Arc<dyn UserRepositoryPort>,
        session: Arc<dyn SessionPort>,
    ) -> Self {
        Self {
            mediator,
            books,
            users,
            session,
        }
    }

    pub async fn execute(
        &self,
        action: TransactionAction,
        book_id: &BookId,
    ) -> Result<ShareId, HandshakeError> {
        let span = info_span!(
            "usecase.handshake.begin",
            action = %action,
            book_uid = %book_id,
        );

        async move {
            let user_id = self.session.current_user_id();
            let owner = self
                .users
                .find_by_id(&user_id)
                .await?
                .ok_or(HandshakeError::IncompleteProfile)?;
            if !owner.is_complete() {
                warn!("profile missing contact fields, refusing to contact mediator");
                return Err(HandshakeError::IncompleteProfile);
            }

            let book = self
                .books
                .find_by_id(book_id)
                .await?
                .ok_or_else(|| HandshakeError::Ledger(format!("book {book_id} not found")))?;

            let intent = TransactionIntent::new(action, book, owner);
            let share_id = self.mediator.init(&intent).await?;
            info!(share_id = %share_id, "transaction registered with mediator");
            Ok(share_id)
        }
        .instrument(span)
        .await
    }
}
