use std::sync::Arc;

use tracing::info;

use ss_core::ids::BookId;
use ss_core::ports::BookRepositoryPort;
use ss_core::HandshakeError;

/// Drops a book from the local ledger on the user's request.
pub struct RemoveBookUseCase {
    books: Arc<dyn BookRepositoryPort>,
}

impl RemoveBookUseCase {
    pub fn new(books: Arc<dyn BookRepositoryPort>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, uid: &BookId) -> Result<(), HandshakeError> {
        self.books.delete(uid).await?;
        info!(book_uid = %uid, "book removed from the ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryBookRepository;
    use ss_core::Book;

    #[tokio::test]
    async fn removes_the_row_and_tolerates_absence() {
        let books = Arc::new(InMemoryBookRepository::default());
        books.insert(Book {
            uid: BookId::from("b-1"),
            isbn: "isbn".to_string(),
            title: "title".to_string(),
            authors: None,
            cover_url: None,
            holder_id: None,
            owner_id: None,
        });
        let usecase = RemoveBookUseCase::new(books.clone());

        usecase.execute(&BookId::from("b-1")).await.unwrap();
        assert!(books.get("b-1").is_none());

        // Deleting again is not an error.
        usecase.execute(&BookId::from("b-1")).await.unwrap();
    }
}
