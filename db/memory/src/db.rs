use std::collections::BTreeMap;

use anyhow::{Error, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{client::ClientModel, project::ProjectModel};

#[derive(Default)]
struct Collections {
    // UUIDv7 keys keep both maps in creation order.
    clients: BTreeMap<Uuid, ClientModel>,
    projects: BTreeMap<Uuid, ProjectModel>,
}

pub struct MemoryDb {
    collections: RwLock<Collections>,
}

impl MemoryDb {
    pub fn new() -> Self {
        pm_log::info(Some("⚡"), "[MemoryDb] Initializing component");

        Self {
            collections: RwLock::new(Collections::default()),
        }
    }

    pub async fn insert_client(&self, value: &ClientModel) -> Result<()> {
        let mut collections = self.collections.write().await;
        if collections.clients.contains_key(value.id()) {
            return Err(Error::msg(format!("Client {} already exists", value.id())));
        }
        collections.clients.insert(*value.id(), value.clone());
        Ok(())
    }

    pub async fn select_client(&self, id: &Uuid) -> Result<Option<ClientModel>> {
        Ok(self.collections.read().await.clients.get(id).cloned())
    }

    pub async fn select_many_clients(&self) -> Result<Vec<ClientModel>> {
        Ok(self
            .collections
            .read()
            .await
            .clients
            .values()
            .cloned()
            .collect())
    }

    pub async fn select_many_clients_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ClientModel>> {
        let collections = self.collections.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| collections.clients.get(id).cloned())
            .collect())
    }

    pub async fn delete_client_cascade(&self, id: &Uuid) -> Result<(Option<ClientModel>, u64)> {
        let mut collections = self.collections.write().await;

        let before = collections.projects.len();
        collections
            .projects
            .retain(|_, project| project.client_id() != id);
        let projects_deleted = u64::try_from(before - collections.projects.len())?;

        Ok((collections.clients.remove(id), projects_deleted))
    }

    pub async fn insert_project(&self, value: &ProjectModel) -> Result<()> {
        let mut collections = self.collections.write().await;
        if collections.projects.contains_key(value.id()) {
            return Err(Error::msg(format!("Project {} already exists", value.id())));
        }
        collections.projects.insert(*value.id(), value.clone());
        Ok(())
    }

    pub async fn select_project(&self, id: &Uuid) -> Result<Option<ProjectModel>> {
        Ok(self.collections.read().await.projects.get(id).cloned())
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self
            .collections
            .read()
            .await
            .projects
            .values()
            .cloned()
            .collect())
    }

    pub async fn update_project(&self, value: &ProjectModel) -> Result<bool> {
        let mut collections = self.collections.write().await;
        match collections.projects.get_mut(value.id()) {
            Some(project) => {
                *project = value.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<Option<ProjectModel>> {
        Ok(self.collections.write().await.projects.remove(id))
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}
