use ss_core::ids::UserId;
use ss_core::UserProfile;

use crate::db::models::UserRow;

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            uid: UserId::from(row.uid),
            full_name: row.full_name,
            tel: row.tel,
            email: row.email,
        }
    }
}

impl From<&UserProfile> for UserRow {
    fn from(profile: &UserProfile) -> Self {
        UserRow {
            uid: profile.uid.as_str().to_string(),
            full_name: profile.full_name.clone(),
            tel: profile.tel.clone(),
            email: profile.email.clone(),
        }
    }
}
