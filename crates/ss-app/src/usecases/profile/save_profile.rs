use std::sync::Arc;

use tracing::info;

use ss_core::ports::{SessionPort, UserRepositoryPort};
use ss_core::{HandshakeError, UserProfile};

/// Upserts the current user's own profile row.
///
/// The uid always comes from the session; the whole row is replaced, which
/// is also how remote parties' cached rows behave on reconciliation.
pub struct SaveProfileUseCase {
    users: Arc<dyn UserRepositoryPort>,
    session: Arc<dyn SessionPort>,
}

impl SaveProfileUseCase {
    pub fn new(users: Arc<dyn UserRepositoryPort>, session: Arc<dyn SessionPort>) -> Self {
        Self { users, session }
    }

    pub async fn execute(
        &self,
        full_name: String,
        tel: String,
        email: String,
    ) -> Result<UserProfile, HandshakeError> {
        let profile = UserProfile {
            uid: self.session.current_user_id(),
            full_name,
            tel,
            email,
        };
        self.users.save(profile.clone()).await?;
        info!(uid = %profile.uid, complete = profile.is_complete(), "profile saved");
        Ok(profile)
    }
}
