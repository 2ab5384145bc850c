use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable person identifier, minted once per device on first run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl_id!(UserId);
