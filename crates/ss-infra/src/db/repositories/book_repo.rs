use async_trait::async_trait;
use diesel::prelude::*;

use ss_core::ids::BookId;
use ss_core::ports::{BookRepositoryPort, LedgerError};
use ss_core::Book;

use crate::db::{models::BookRow, pool::DbPool, schema::t_book::dsl::*};

pub struct DieselBookRepository {
    pool: DbPool,
    // Reconciliation and manual edits may target the same row from
    // different tasks; writes take this guard so the last full row wins
    // instead of interleaving.
    write_guard: tokio::sync::Mutex<()>,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            write_guard: tokio::sync::Mutex::new(()),
        }
    }
}

#[async_trait]
impl BookRepositoryPort for DieselBookRepository {
    async fn find_by_id(&self, book_uid: &BookId) -> Result<Option<Book>, LedgerError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let row = t_book
            .filter(uid.eq(book_uid.as_str()))
            .first::<BookRow>(&mut conn)
            .optional()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(row.map(Book::from))
    }

    async fn save(&self, book: Book) -> Result<(), LedgerError> {
        let _write = self.write_guard.lock().await;
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let row = BookRow::from(&book);

        diesel::insert_into(t_book)
            .values(&row)
            .on_conflict(uid)
            .do_update()
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, book_uid: &BookId) -> Result<(), LedgerError> {
        let _write = self.write_guard.lock().await;
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        diesel::delete(t_book.filter(uid.eq(book_uid.as_str())))
            .execute(&mut conn)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Book>, LedgerError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let rows = t_book
            .load::<BookRow>(&mut conn)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(Book::from).collect())
    }
}
