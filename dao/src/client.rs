use anyhow::Result;
use pm_db_memory::model::client::ClientModel as ClientMemoryModel;
use pm_db_sqlite::model::client::ClientModel as ClientSqliteModel;
use uuid::Uuid;

use crate::Db;

#[derive(Clone)]
pub struct ClientDao {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
}

impl ClientDao {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.insert_client(&self.to_sqlitedb_model()).await,
            Db::MemoryDb(db) => db.insert_client(&self.to_memorydb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_client(id)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))),
            Db::MemoryDb(db) => Ok(db
                .select_client(id)
                .await?
                .map(|model| Self::from_memorydb_model(&model))),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let clients = db.select_many_clients().await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_sqlitedb_model(client));
                }
                Ok(clients_data)
            }
            Db::MemoryDb(db) => {
                let clients = db.select_many_clients().await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_memorydb_model(client));
                }
                Ok(clients_data)
            }
        }
    }

    /// Missing ids are skipped; the result order is unspecified.
    pub async fn db_select_many_by_ids(db: &Db, ids: &[Uuid]) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_many_clients_by_ids(ids)
                .await?
                .iter()
                .map(Self::from_sqlitedb_model)
                .collect()),
            Db::MemoryDb(db) => Ok(db
                .select_many_clients_by_ids(ids)
                .await?
                .iter()
                .map(Self::from_memorydb_model)
                .collect()),
        }
    }

    /// Deletes every project owned by the client, then the client itself.
    ///
    /// The projects are removed even when the client record is already gone,
    /// so dangling references are cleaned up as well. Returns the deleted
    /// client, or `None` if it did not exist.
    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        let (client_data, projects_deleted) = match db {
            Db::SqliteDb(db) => {
                let (client, projects_deleted) = db.delete_client_cascade(id).await?;
                (
                    client.map(|model| Self::from_sqlitedb_model(&model)),
                    projects_deleted,
                )
            }
            Db::MemoryDb(db) => {
                let (client, projects_deleted) = db.delete_client_cascade(id).await?;
                (
                    client.map(|model| Self::from_memorydb_model(&model)),
                    projects_deleted,
                )
            }
        };

        pm_log::debug(
            Some("🗑️"),
            format!(
                "[ClientDao] Deleted client {id} (found: {}) and {projects_deleted} project(s)",
                client_data.is_some()
            ),
        );

        Ok(client_data)
    }

    fn from_sqlitedb_model(model: &ClientSqliteModel) -> Self {
        Self {
            id: *model.id(),
            name: model.name().to_owned(),
            email: model.email().to_owned(),
            phone: model.phone().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> ClientSqliteModel {
        ClientSqliteModel::new(&self.id, &self.name, &self.email, &self.phone)
    }

    fn from_memorydb_model(model: &ClientMemoryModel) -> Self {
        Self {
            id: *model.id(),
            name: model.name().to_owned(),
            email: model.email().to_owned(),
            phone: model.phone().to_owned(),
        }
    }

    fn to_memorydb_model(&self) -> ClientMemoryModel {
        ClientMemoryModel::new(&self.id, &self.name, &self.email, &self.phone)
    }
}
