use async_trait::async_trait;

use crate::ids::BookId;
use crate::library::Book;
use crate::ports::errors::LedgerError;

#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    async fn find_by_id(&self, uid: &BookId) -> Result<Option<Book>, LedgerError>;

    /// Insert or overwrite the full row. A cleared relationship field must
    /// overwrite whatever the row held before.
    async fn save(&self, book: Book) -> Result<(), LedgerError>;

    /// Deleting an absent row is not an error.
    async fn delete(&self, uid: &BookId) -> Result<(), LedgerError>;

    async fn list_all(&self) -> Result<Vec<Book>, LedgerError>;
}
