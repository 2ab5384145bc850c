use diesel::prelude::*;

use crate::db::schema::t_user;

#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = t_user)]
pub struct UserRow {
    pub uid: String,
    pub full_name: String,
    pub tel: String,
    pub email: String,
}
