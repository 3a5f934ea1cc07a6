use std::sync::Arc;

use async_graphql::{Request, Variables};
use pm_api_graphql::{
    context::{ApiGraphqlCtx, ApiGraphqlDaoCtx},
    schema::{build_schema, ProjmanSchema},
};
use pm_dao::Db;
use pm_db_memory::db::MemoryDb;
use pm_db_sqlite::db::SqliteDb;
use serde_json::Value;
use tempfile::TempDir;

pub fn memory_schema() -> ProjmanSchema {
    let db = Arc::new(Db::MemoryDb(MemoryDb::new()));
    build_schema(ApiGraphqlCtx::new(ApiGraphqlDaoCtx::new(db)))
}

/// A schema over a fresh on-disk SQLite store. `setup` runs raw SQL against
/// it first.
pub async fn sqlite_schema(setup: &str) -> (TempDir, ProjmanSchema) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite:{}?mode=rwc",
        dir.path().join("projman.db").display()
    );
    let db = SqliteDb::new(&url, &1).await.unwrap();
    db.execute(sqlx::query(setup)).await.unwrap();

    let db = Arc::new(Db::SqliteDb(db));
    (dir, build_schema(ApiGraphqlCtx::new(ApiGraphqlDaoCtx::new(db))))
}

/// Runs `query` and returns the serialized `{ data, errors? }` response.
pub async fn execute(schema: &ProjmanSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    serde_json::to_value(schema.execute(request).await).unwrap()
}

/// Like [`execute`] but fails the test on any GraphQL error and returns `data`.
pub async fn data(schema: &ProjmanSchema, query: &str, variables: Value) -> Value {
    let res = execute(schema, query, variables).await;
    assert!(res.get("errors").is_none(), "unexpected errors: {res}");
    res["data"].clone()
}

pub async fn add_client(schema: &ProjmanSchema, name: &str) -> String {
    let data = data(
        schema,
        "mutation ($name: String!) { addClient(name: $name, email: \"e@example.com\", phone: \"555\") { id } }",
        serde_json::json!({ "name": name }),
    )
    .await;
    data["addClient"]["id"].as_str().unwrap().to_owned()
}

pub async fn add_project(schema: &ProjmanSchema, name: &str, client_id: &str) -> String {
    let data = data(
        schema,
        "mutation ($name: String!, $clientId: ID!) { addProject(name: $name, description: \"d\", clientId: $clientId) { id } }",
        serde_json::json!({ "name": name, "clientId": client_id }),
    )
    .await;
    data["addProject"]["id"].as_str().unwrap().to_owned()
}
