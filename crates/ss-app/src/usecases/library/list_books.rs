use std::sync::Arc;

use ss_core::ports::BookRepositoryPort;
use ss_core::{Book, HandshakeError};

/// Lists every book in the local ledger: own shelf, lent out, borrowed.
pub struct ListBooksUseCase {
    books: Arc<dyn BookRepositoryPort>,
}

impl ListBooksUseCase {
    pub fn new(books: Arc<dyn BookRepositoryPort>) -> Self {
        Self { books }
    }

    pub async fn execute(&self) -> Result<Vec<Book>, HandshakeError> {
        Ok(self.books.list_all().await?)
    }
}
