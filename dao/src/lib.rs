use pm_db_memory::db::MemoryDb;
use pm_db_sqlite::db::SqliteDb;

pub mod client;
pub mod project;

pub enum Db {
    SqliteDb(SqliteDb),
    MemoryDb(MemoryDb),
}
