use ss_core::ids::{BookId, UserId};
use ss_core::Book;

use crate::db::models::BookRow;

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            uid: BookId::from(row.uid),
            isbn: row.isbn,
            title: row.title,
            authors: row.authors,
            cover_url: row.cover_url,
            holder_id: row.holder_id.map(UserId::from),
            owner_id: row.owner_id.map(UserId::from),
        }
    }
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        BookRow {
            uid: book.uid.as_str().to_string(),
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            authors: book.authors.clone(),
            cover_url: book.cover_url.clone(),
            holder_id: book.holder_id.as_ref().map(|id| id.as_str().to_string()),
            owner_id: book.owner_id.as_ref().map(|id| id.as_str().to_string()),
        }
    }
}
