use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"projects\" (\"id\", \"name\", \"description\", \"status\", \"client_id\") VALUES (?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"name\", \"description\", \"status\", \"client_id\" FROM \"projects\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"name\", \"description\", \"status\", \"client_id\" FROM \"projects\" ORDER BY \"id\"";
const UPDATE: &str = "UPDATE \"projects\" SET \"name\" = ?, \"description\" = ?, \"status\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ? RETURNING \"id\", \"name\", \"description\", \"status\", \"client_id\"";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    pm_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" blob, \"name\" text NOT NULL, \"description\" text NOT NULL, \"status\" text NOT NULL, \"client_id\" blob NOT NULL, PRIMARY KEY (\"id\"))").await?;
    pool.execute("CREATE INDEX IF NOT EXISTS \"projects_client_id\" ON \"projects\" (\"client_id\")").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.name())
                .bind(value.description())
                .bind(value.status())
                .bind(value.client_id()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_project(&self, id: &Uuid) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    /// Returns `false` when no row with the model's id exists.
    pub async fn update_project(&self, value: &ProjectModel) -> Result<bool> {
        let res = self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.name())
                    .bind(value.description())
                    .bind(value.status())
                    .bind(value.id()),
            )
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(DELETE).bind(id)).await?)
    }
}
