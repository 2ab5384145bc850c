use diesel::prelude::*;

use crate::db::schema::t_book;

// treat_none_as_null: an upsert with a cleared relationship field must
// overwrite the stored value to NULL, not keep the old one.
#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = t_book)]
#[diesel(treat_none_as_null = true)]
pub struct BookRow {
    pub uid: String,
    pub isbn: String,
    pub title: String,
    pub authors: Option<String>,
    pub cover_url: Option<String>,
    pub holder_id: Option<String>,
    pub owner_id: Option<String>,
}
