//! Wire types for the mediator's JSON contract.
//!
//! Field names follow the service's camelCase convention and must not
//! change: already-deployed devices and the mediator both speak this shape.

use serde::{Deserialize, Serialize};

use ss_core::ids::{BookId, UserId};
use ss_core::{Book, TransactionAction, TransactionIntent, TransactionOutcome, UserProfile};

#[derive(Debug, Serialize)]
pub struct InitRequest {
    pub action: TransactionAction,
    pub book: BookDto,
    pub owner: UserDto,
}

impl From<&TransactionIntent> for InitRequest {
    fn from(intent: &TransactionIntent) -> Self {
        InitRequest {
            action: intent.action,
            book: BookDto::from(&intent.book),
            owner: UserDto::from(&intent.owner),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InitResponse {
    #[serde(rename = "shareId")]
    pub share_id: String,
}

#[derive(Debug, Serialize)]
pub struct AcceptRequest {
    pub borrower: UserDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookDto {
    pub uid: String,
    pub isbn: String,
    pub title: String,
    pub authors: Option<String>,
    pub covers: Option<String>,
    #[serde(rename = "borrowerId")]
    pub borrower_id: Option<String>,
    #[serde(rename = "lenderId")]
    pub lender_id: Option<String>,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        BookDto {
            uid: book.uid.as_str().to_string(),
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            authors: book.authors.clone(),
            covers: book.cover_url.clone(),
            borrower_id: book.holder_id.as_ref().map(|id| id.as_str().to_string()),
            lender_id: book.owner_id.as_ref().map(|id| id.as_str().to_string()),
        }
    }
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            uid: BookId::from(dto.uid),
            isbn: dto.isbn,
            title: dto.title,
            authors: dto.authors,
            cover_url: dto.covers,
            holder_id: dto.borrower_id.map(UserId::from),
            owner_id: dto.lender_id.map(UserId::from),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub uid: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub tel: String,
    pub email: String,
}

impl From<&UserProfile> for UserDto {
    fn from(profile: &UserProfile) -> Self {
        UserDto {
            uid: profile.uid.as_str().to_string(),
            full_name: profile.full_name.clone(),
            tel: profile.tel.clone(),
            email: profile.email.clone(),
        }
    }
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        UserProfile {
            uid: UserId::from(dto.uid),
            full_name: dto.full_name,
            tel: dto.tel,
            email: dto.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionData {
    pub action: TransactionAction,
    pub book: BookDto,
    pub owner: UserDto,
    #[serde(default)]
    pub borrower: Option<UserDto>,
}

impl From<TransactionData> for TransactionOutcome {
    fn from(data: TransactionData) -> Self {
        TransactionOutcome {
            action: data.action,
            book: Book::from(data.book),
            owner: UserProfile::from(data.owner),
            borrower: data.borrower.map(UserProfile::from),
        }
    }
}
