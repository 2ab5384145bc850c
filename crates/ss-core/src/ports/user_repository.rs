use async_trait::async_trait;

use crate::ids::UserId;
use crate::library::UserProfile;
use crate::ports::errors::LedgerError;

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn find_by_id(&self, uid: &UserId) -> Result<Option<UserProfile>, LedgerError>;

    /// Insert or overwrite.
    async fn save(&self, profile: UserProfile) -> Result<(), LedgerError>;
}
