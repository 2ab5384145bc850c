//! Infrastructure adapters for ShelfSwap: the diesel/SQLite ledger, the
//! file-backed session store and the configuration loader.

pub mod config;
pub mod db;
pub mod fs;
pub mod session;

pub use db::pool::{init_db_pool, DbPool};
pub use session::FileSessionStore;
