use std::sync::Arc;

use pm_db_sqlite::{
    db::SqliteDb,
    model::{client::ClientModel, project::ProjectModel},
};
use tempfile::TempDir;
use uuid::Uuid;

async fn open_db() -> (TempDir, SqliteDb) {
    open_db_with_connections(1).await
}

async fn open_db_with_connections(max_connections: u32) -> (TempDir, SqliteDb) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite:{}?mode=rwc",
        dir.path().join("projman.db").display()
    );
    let db = SqliteDb::new(&url, &max_connections).await.unwrap();
    (dir, db)
}

fn client(name: &str) -> ClientModel {
    ClientModel::new(&Uuid::now_v7(), name, "mail@example.com", "555-0100")
}

fn project(name: &str, client_id: &Uuid) -> ProjectModel {
    ProjectModel::new(&Uuid::now_v7(), name, "desc", "Not Started", client_id)
}

#[tokio::test]
async fn insert_and_select_client() {
    let (_dir, db) = open_db().await;

    let value = client("Tony Stark");
    db.insert_client(&value).await.unwrap();

    let loaded = db.select_client(value.id()).await.unwrap().unwrap();
    assert_eq!(loaded.id(), value.id());
    assert_eq!(loaded.name(), "Tony Stark");
    assert_eq!(loaded.email(), "mail@example.com");
    assert_eq!(loaded.phone(), "555-0100");

    assert!(db.select_client(&Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn select_many_clients_keeps_creation_order() {
    let (_dir, db) = open_db().await;

    for name in ["first", "second", "third"] {
        db.insert_client(&client(name)).await.unwrap();
    }

    let names: Vec<String> = db
        .select_many_clients()
        .await
        .unwrap()
        .iter()
        .map(|c| c.name().to_owned())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[tokio::test]
async fn select_many_clients_by_ids_skips_missing() {
    let (_dir, db) = open_db().await;

    let a = client("a");
    let b = client("b");
    db.insert_client(&a).await.unwrap();
    db.insert_client(&b).await.unwrap();

    let found = db
        .select_many_clients_by_ids(&[*a.id(), Uuid::now_v7(), *b.id()])
        .await
        .unwrap();
    assert_eq!(found.len(), 2);

    assert!(db.select_many_clients_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_client_cascade_removes_owned_projects_only() {
    let (_dir, db) = open_db().await;

    let owner = client("owner");
    let other = client("other");
    db.insert_client(&owner).await.unwrap();
    db.insert_client(&other).await.unwrap();
    for i in 0..3 {
        db.insert_project(&project(&format!("p{i}"), owner.id()))
            .await
            .unwrap();
    }
    db.insert_project(&project("kept", other.id())).await.unwrap();

    let (deleted, projects_deleted) = db.delete_client_cascade(owner.id()).await.unwrap();
    assert_eq!(deleted.unwrap().id(), owner.id());
    assert_eq!(projects_deleted, 3);

    assert!(db.select_client(owner.id()).await.unwrap().is_none());
    let remaining = db.select_many_projects().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name(), "kept");
}

#[tokio::test]
async fn delete_missing_client_returns_none() {
    let (_dir, db) = open_db().await;

    let (deleted, projects_deleted) = db.delete_client_cascade(&Uuid::now_v7()).await.unwrap();
    assert!(deleted.is_none());
    assert_eq!(projects_deleted, 0);
}

#[tokio::test]
async fn update_and_delete_project() {
    let (_dir, db) = open_db().await;

    let owner = client("owner");
    db.insert_client(&owner).await.unwrap();
    let value = project("A", owner.id());
    db.insert_project(&value).await.unwrap();

    let updated = ProjectModel::new(value.id(), "A", "B", "In Progress", owner.id());
    assert!(db.update_project(&updated).await.unwrap());

    let loaded = db.select_project(value.id()).await.unwrap().unwrap();
    assert_eq!(loaded.description(), "B");
    assert_eq!(loaded.status(), "In Progress");

    let deleted = db.delete_project(value.id()).await.unwrap().unwrap();
    assert_eq!(deleted.id(), value.id());
    assert!(db.delete_project(value.id()).await.unwrap().is_none());

    let missing = ProjectModel::new(&Uuid::now_v7(), "x", "y", "Completed", owner.id());
    assert!(!db.update_project(&missing).await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_and_inserts_do_not_fail() {
    let (_dir, db) = open_db_with_connections(5).await;
    let db = Arc::new(db);

    let mut seeded = Vec::new();
    for i in 0..100 {
        let owner = client(&format!("client {i}"));
        db.insert_client(&owner).await.unwrap();
        let mut project_ids = Vec::new();
        for j in 0..3 {
            let value = project(&format!("project {i}.{j}"), owner.id());
            db.insert_project(&value).await.unwrap();
            project_ids.push(*value.id());
        }
        seeded.push((*owner.id(), project_ids));
    }

    let mut tasks = Vec::new();
    for (client_id, project_ids) in seeded {
        let cascade_db = db.clone();
        tasks.push(tokio::spawn(async move {
            cascade_db
                .delete_client_cascade(&client_id)
                .await
                .map(|_| ())
        }));

        let insert_db = db.clone();
        tasks.push(tokio::spawn(async move {
            insert_db
                .insert_project(&project("late", &client_id))
                .await
        }));

        let delete_db = db.clone();
        tasks.push(tokio::spawn(async move {
            delete_db.delete_project(&project_ids[0]).await.map(|_| ())
        }));
    }

    let mut failures = Vec::new();
    for task in tasks {
        if let Err(err) = task.await.unwrap() {
            failures.push(err.to_string());
        }
    }
    assert!(failures.is_empty(), "store errors: {failures:?}");

    assert!(db.select_many_clients().await.unwrap().is_empty());
}
