use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable, globally unique book identifier.
///
/// Books created from a catalog lookup reuse the ISBN as their uid, so this
/// is not always a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl_id!(BookId);
