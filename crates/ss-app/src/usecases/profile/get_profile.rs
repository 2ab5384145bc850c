use std::sync::Arc;

use ss_core::ports::{SessionPort, UserRepositoryPort};
use ss_core::{HandshakeError, UserProfile};

/// Reads the current user's own profile row, if they saved one yet.
pub struct GetProfileUseCase {
    users: Arc<dyn UserRepositoryPort>,
    session: Arc<dyn SessionPort>,
}

impl GetProfileUseCase {
    pub fn new(users: Arc<dyn UserRepositoryPort>, session: Arc<dyn SessionPort>) -> Self {
        Self { users, session }
    }

    pub async fn execute(&self) -> Result<Option<UserProfile>, HandshakeError> {
        let user_id = self.session.current_user_id();
        Ok(self.users.find_by_id(&user_id).await?)
    }
}
