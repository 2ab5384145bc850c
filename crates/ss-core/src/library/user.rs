use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A person record.
///
/// On the owning device this is the user's own profile; rows for other
/// parties are cached copies of what the mediator reported and are never the
/// source of truth for that party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: UserId,
    pub full_name: String,
    pub tel: String,
    pub email: String,
}

impl UserProfile {
    /// All contact fields populated.
    ///
    /// A transaction may only be initiated or accepted with a complete
    /// profile, so the other party always learns who they are dealing with.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.tel.is_empty() && !self.email.is_empty()
    }
}
