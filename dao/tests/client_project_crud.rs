use pm_dao::{
    client::ClientDao,
    project::{ProjectDao, ProjectStatus},
    Db,
};
use pm_db_memory::db::MemoryDb;
use pm_db_sqlite::db::SqliteDb;
use tempfile::TempDir;
use uuid::Uuid;

async fn sqlite_db() -> (TempDir, Db) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("dao.db").display());
    let db = SqliteDb::new(&url, &1).await.unwrap();
    (dir, Db::SqliteDb(db))
}

fn memory_db() -> Db {
    Db::MemoryDb(MemoryDb::new())
}

async fn assert_cascade_delete(db: &Db, n: usize) {
    let owner = ClientDao::new("Owner", "owner@example.com", "555-0100");
    owner.db_insert(db).await.unwrap();
    let bystander = ClientDao::new("Bystander", "by@example.com", "555-0101");
    bystander.db_insert(db).await.unwrap();

    for i in 0..n {
        ProjectDao::new(&format!("p{i}"), "owned", &ProjectStatus::default(), owner.id())
            .db_insert(db)
            .await
            .unwrap();
    }
    ProjectDao::new("other", "kept", &ProjectStatus::Completed, bystander.id())
        .db_insert(db)
        .await
        .unwrap();

    let clients_before = ClientDao::db_select_many(db).await.unwrap().len();
    let projects_before = ProjectDao::db_select_many(db).await.unwrap().len();

    let deleted = ClientDao::db_delete(db, owner.id()).await.unwrap().unwrap();
    assert_eq!(deleted.id(), owner.id());

    assert_eq!(
        ClientDao::db_select_many(db).await.unwrap().len(),
        clients_before - 1
    );
    assert_eq!(
        ProjectDao::db_select_many(db).await.unwrap().len(),
        projects_before - n
    );
    assert!(ProjectDao::db_select_many(db)
        .await
        .unwrap()
        .iter()
        .all(|project_data| project_data.client_id() != owner.id()));
}

#[tokio::test]
async fn cascade_delete_removes_exactly_the_owned_projects_in_memory() {
    for n in [0, 1, 4] {
        assert_cascade_delete(&memory_db(), n).await;
    }
}

#[tokio::test]
async fn cascade_delete_removes_exactly_the_owned_projects_in_sqlite() {
    for n in [0, 1, 4] {
        let (_dir, db) = sqlite_db().await;
        assert_cascade_delete(&db, n).await;
    }
}

#[tokio::test]
async fn inserted_client_keeps_supplied_fields() {
    let db = memory_db();

    let client = ClientDao::new("Tony Stark", "ironman@gmail.com", "955-365-3376");
    client.db_insert(&db).await.unwrap();

    let loaded = ClientDao::db_select(&db, client.id()).await.unwrap().unwrap();
    assert!(!loaded.id().is_nil());
    assert_eq!(loaded.name(), "Tony Stark");
    assert_eq!(loaded.email(), "ironman@gmail.com");
    assert_eq!(loaded.phone(), "955-365-3376");
}

#[tokio::test]
async fn missing_records_are_none() {
    let (_dir, db) = sqlite_db().await;
    let id = Uuid::now_v7();

    assert!(ClientDao::db_select(&db, &id).await.unwrap().is_none());
    assert!(ProjectDao::db_select(&db, &id).await.unwrap().is_none());
    assert!(ClientDao::db_delete(&db, &id).await.unwrap().is_none());
    assert!(ProjectDao::db_delete(&db, &id).await.unwrap().is_none());
}

#[tokio::test]
async fn status_survives_the_store() {
    let (_dir, db) = sqlite_db().await;
    let client_id = Uuid::now_v7();

    let mut project = ProjectDao::new("A", "B", &ProjectStatus::default(), &client_id);
    project.db_insert(&db).await.unwrap();

    project.set_status(&ProjectStatus::InProgress);
    assert!(project.db_update(&db).await.unwrap());

    let loaded = ProjectDao::db_select(&db, project.id()).await.unwrap().unwrap();
    assert_eq!(loaded.name(), "A");
    assert_eq!(loaded.description(), "B");
    assert_eq!(loaded.status(), &ProjectStatus::InProgress);
    assert_eq!(loaded.client_id(), &client_id);
}

#[tokio::test]
async fn select_many_by_ids_batches_lookups() {
    let db = memory_db();

    let a = ClientDao::new("a", "a@example.com", "1");
    let b = ClientDao::new("b", "b@example.com", "2");
    a.db_insert(&db).await.unwrap();
    b.db_insert(&db).await.unwrap();

    let mut names: Vec<String> =
        ClientDao::db_select_many_by_ids(&db, &[*b.id(), *a.id(), Uuid::now_v7()])
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
    names.sort();
    assert_eq!(names, ["a", "b"]);
}
