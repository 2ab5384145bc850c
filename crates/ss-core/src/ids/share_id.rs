use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque hand-off token minted by the mediator when a transaction is
/// registered.
///
/// It is the only fact transferred out-of-band between the two devices and
/// carries no meaning of its own; only the mediator can resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareId(String);

impl_id!(ShareId);
