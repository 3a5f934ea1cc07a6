use anyhow::Result;
use itertools::Itertools;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::client::ClientModel};

const INSERT: &str =
    "INSERT INTO \"clients\" (\"id\", \"name\", \"email\", \"phone\") VALUES (?, ?, ?, ?)";
const SELECT: &str =
    "SELECT \"id\", \"name\", \"email\", \"phone\" FROM \"clients\" WHERE \"id\" = ?";
const SELECT_MANY: &str =
    "SELECT \"id\", \"name\", \"email\", \"phone\" FROM \"clients\" ORDER BY \"id\"";
const DELETE: &str = "DELETE FROM \"clients\" WHERE \"id\" = ? RETURNING \"id\", \"name\", \"email\", \"phone\"";
const DELETE_PROJECTS_BY_CLIENT_ID: &str = "DELETE FROM \"projects\" WHERE \"client_id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    pm_log::info(Some("🔧"), "[SQLite] Setting up clients table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"clients\" (\"id\" blob, \"name\" text NOT NULL, \"email\" text NOT NULL, \"phone\" text NOT NULL, PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(DELETE).await?;
    pool.prepare(DELETE_PROJECTS_BY_CLIENT_ID).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_client(&self, value: &ClientModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.name())
                .bind(value.email())
                .bind(value.phone()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_client(&self, id: &Uuid) -> Result<Option<ClientModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_clients(&self) -> Result<Vec<ClientModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_clients_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ClientModel>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT \"id\", \"name\", \"email\", \"phone\" FROM \"clients\" WHERE \"id\" IN ({})",
            ids.iter().map(|_| "?").join(", ")
        );
        let mut query = sqlx::query_as::<Sqlite, ClientModel>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        Ok(self.fetch_all_unprepared(query).await?)
    }

    /// Deletes the projects owned by `id`, then the client, in one transaction.
    ///
    /// Returns the removed client (if it existed) and how many projects went with it.
    pub async fn delete_client_cascade(&self, id: &Uuid) -> Result<(Option<ClientModel>, u64)> {
        let mut tx = self.begin().await?;

        // The first statement must write: a deferred transaction that reads
        // first cannot upgrade its lock while another writer is active.
        let projects_deleted = sqlx::query(DELETE_PROJECTS_BY_CLIENT_ID)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let client = sqlx::query_as::<Sqlite, ClientModel>(DELETE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((client, projects_deleted))
    }
}
