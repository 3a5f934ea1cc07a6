use anyhow::Result;
use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqlitePoolOptions, SqliteQueryResult, SqliteRow},
    Error, Pool, Sqlite, Transaction,
};

use crate::query::{client, project};

pub struct SqliteDb {
    pool: Pool<Sqlite>,
}

impl SqliteDb {
    /// Connects to `url` (e.g. `sqlite:projman.db?mode=rwc`) and creates the tables if missing.
    pub async fn new(url: &str, max_connections: &u32) -> Result<Self> {
        pm_log::info(Some("⚡"), "[SQLite] Initializing component");

        let pool = SqlitePoolOptions::new()
            .max_connections(*max_connections)
            .connect(url)
            .await?;

        Self::init(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Result<SqliteQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_optional<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }

    pub async fn fetch_all_unprepared<
        'a,
        T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>,
    >(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.persistent(false).fetch_all(&self.pool).await
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, Error> {
        self.pool.begin().await
    }

    async fn init(pool: &Pool<Sqlite>) -> Result<()> {
        client::init(pool).await?;
        project::init(pool).await?;
        Ok(())
    }
}
