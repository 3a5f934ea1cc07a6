use anyhow::{Error, Result};
use pm_db_memory::model::project::ProjectModel as ProjectMemoryModel;
use pm_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::Db;

/// Lifecycle of a project. The display form is what gets persisted and served.
#[derive(Display, EnumString, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProjectStatus {
    #[default]
    #[strum(serialize = "Not Started")]
    NotStarted,
    #[strum(serialize = "In Progress")]
    InProgress,
    #[strum(serialize = "Completed")]
    Completed,
}

#[derive(Clone)]
pub struct ProjectDao {
    id: Uuid,
    name: String,
    description: String,
    status: ProjectStatus,
    client_id: Uuid,
}

impl ProjectDao {
    pub fn new(name: &str, description: &str, status: &ProjectStatus, client_id: &Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            description: description.to_owned(),
            status: *status,
            client_id: *client_id,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &ProjectStatus {
        &self.status
    }

    pub fn client_id(&self) -> &Uuid {
        &self.client_id
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_status(&mut self, status: &ProjectStatus) {
        self.status = *status;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.insert_project(&self.to_sqlitedb_model()).await,
            Db::MemoryDb(db) => db.insert_project(&self.to_memorydb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => match db.select_project(id).await? {
                Some(model) => Ok(Some(Self::from_sqlitedb_model(&model)?)),
                None => Ok(None),
            },
            Db::MemoryDb(db) => match db.select_project(id).await? {
                Some(model) => Ok(Some(Self::from_memorydb_model(&model)?)),
                None => Ok(None),
            },
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project)?);
                }
                Ok(projects_data)
            }
            Db::MemoryDb(db) => {
                let projects = db.select_many_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_memorydb_model(project)?);
                }
                Ok(projects_data)
            }
        }
    }

    /// Overwrites the stored record. Returns `false` if it no longer exists.
    pub async fn db_update(&self, db: &Db) -> Result<bool> {
        match db {
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await,
            Db::MemoryDb(db) => db.update_project(&self.to_memorydb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => match db.delete_project(id).await? {
                Some(model) => Ok(Some(Self::from_sqlitedb_model(&model)?)),
                None => Ok(None),
            },
            Db::MemoryDb(db) => match db.delete_project(id).await? {
                Some(model) => Ok(Some(Self::from_memorydb_model(&model)?)),
                None => Ok(None),
            },
        }
    }

    fn parse_status(status: &str) -> Result<ProjectStatus> {
        status
            .parse()
            .map_err(|_| Error::msg(format!("Unknown project status '{status}' in store")))
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            name: model.name().to_owned(),
            description: model.description().to_owned(),
            status: Self::parse_status(model.status())?,
            client_id: *model.client_id(),
        })
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.name,
            &self.description,
            &self.status.to_string(),
            &self.client_id,
        )
    }

    fn from_memorydb_model(model: &ProjectMemoryModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            name: model.name().to_owned(),
            description: model.description().to_owned(),
            status: Self::parse_status(model.status())?,
            client_id: *model.client_id(),
        })
    }

    fn to_memorydb_model(&self) -> ProjectMemoryModel {
        ProjectMemoryModel::new(
            &self.id,
            &self.name,
            &self.description,
            &self.status.to_string(),
            &self.client_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStatus;

    #[test]
    fn status_labels_round_trip() {
        for (status, label) in [
            (ProjectStatus::NotStarted, "Not Started"),
            (ProjectStatus::InProgress, "In Progress"),
            (ProjectStatus::Completed, "Completed"),
        ] {
            assert_eq!(status.to_string(), label);
            assert_eq!(label.parse::<ProjectStatus>().unwrap(), status);
        }
    }

    #[test]
    fn default_status_is_not_started() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::NotStarted);
        assert!("NotStarted".parse::<ProjectStatus>().is_err());
    }
}
