use serde::{Deserialize, Serialize};

use crate::ids::{BookId, UserId};

/// A physical book tracked by the local ledger.
///
/// The catalog attributes (`isbn`, `title`, `authors`, `cover_url`) are
/// immutable once set. The two relationship fields are mutually exclusive by
/// convention: `holder_id` marks a copy we lent out, `owner_id` marks a copy
/// we borrowed, and both `None` means the book sits on our own shelf. The
/// convention is enforced by the reconciliation engine, not by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub uid: BookId,
    pub isbn: String,
    pub title: String,
    pub authors: Option<String>,
    pub cover_url: Option<String>,
    /// Who currently has physical custody; `None` = held by the local owner.
    pub holder_id: Option<UserId>,
    /// Owner of record when the book is not ours; `None` = we own it.
    pub owner_id: Option<UserId>,
}

impl Book {
    /// On our shelf and free to lend.
    pub fn is_available(&self) -> bool {
        self.holder_id.is_none() && self.owner_id.is_none()
    }

    /// Ours, but somebody else has it.
    pub fn is_lent_out(&self) -> bool {
        self.holder_id.is_some() && self.owner_id.is_none()
    }

    /// Somebody else's, and we have it.
    pub fn is_borrowed(&self) -> bool {
        self.owner_id.is_some()
    }

    /// Copy with the custody marker removed.
    ///
    /// Used when initiating a return: the mediator only needs to know the
    /// owner of record is asking for the book back, not who holds it.
    pub fn with_holder_cleared(mut self) -> Self {
        self.holder_id = None;
        self
    }
}
