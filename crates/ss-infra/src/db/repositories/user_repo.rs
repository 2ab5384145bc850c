use async_trait::async_trait;
use diesel::prelude::*;

use ss_core::ids::UserId;
use ss_core::ports::{LedgerError, UserRepositoryPort};
use ss_core::UserProfile;

use crate::db::{models::UserRow, pool::DbPool, schema::t_user::dsl::*};

pub struct DieselUserRepository {
    pool: DbPool,
    write_guard: tokio::sync::Mutex<()>,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            write_guard: tokio::sync::Mutex::new(()),
        }
    }
}

#[async_trait]
impl UserRepositoryPort for DieselUserRepository {
    async fn find_by_id(&self, user_uid: &UserId) -> Result<Option<UserProfile>, LedgerError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let row = t_user
            .filter(uid.eq(user_uid.as_str()))
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(row.map(UserProfile::from))
    }

    async fn save(&self, profile: UserProfile) -> Result<(), LedgerError> {
        let _write = self.write_guard.lock().await;
        let mut conn = self
            .pool
            .get()
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let row = UserRow::from(&profile);

        diesel::insert_into(t_user)
            .values(&row)
            .on_conflict(uid)
            .do_update()
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(())
    }
}
