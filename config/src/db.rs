use anyhow::{bail, Result};
use serde::Deserialize;

use self::{memory::DbMemoryConfig, sqlite::DbSqliteConfig};

pub mod memory;
pub mod sqlite;

#[derive(Deserialize)]
pub struct DbConfig {
    sqlite: Option<DbSqliteConfig>,
    memory: Option<DbMemoryConfig>,
}

impl DbConfig {
    pub fn sqlite(&self) -> &Option<DbSqliteConfig> {
        &self.sqlite
    }

    pub fn memory(&self) -> &Option<DbMemoryConfig> {
        &self.memory
    }

    pub fn validate(&self) -> Result<()> {
        if self.sqlite.is_some() == self.memory.is_some() {
            bail!("db: exactly one of sqlite / memory must be set");
        }
        Ok(())
    }
}
