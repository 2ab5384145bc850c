use crate::ids::UserId;

/// Read access to the process-wide current user id.
///
/// The id is minted once on the device's first run and never changes
/// afterwards; components that need it receive this accessor instead of
/// reaching for global state.
pub trait SessionPort: Send + Sync {
    fn current_user_id(&self) -> UserId;
}
