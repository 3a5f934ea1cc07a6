use std::sync::Arc;

use async_graphql::{dataloader::DataLoader, Context, Enum, Object, Result, ID};
use pm_dao::project::{ProjectDao, ProjectStatus as ProjectStatusDao};
use pm_error::Error;

use crate::{
    loader::ClientLoader,
    model::{client::Client, gql_error},
};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl From<ProjectStatus> for ProjectStatusDao {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::NotStarted => ProjectStatusDao::NotStarted,
            ProjectStatus::InProgress => ProjectStatusDao::InProgress,
            ProjectStatus::Completed => ProjectStatusDao::Completed,
        }
    }
}

pub struct Project(ProjectDao);

impl From<ProjectDao> for Project {
    fn from(project_data: ProjectDao) -> Self {
        Self(project_data)
    }
}

#[Object]
impl Project {
    async fn id(&self) -> ID {
        ID::from(self.0.id().to_string())
    }

    async fn name(&self) -> &str {
        self.0.name()
    }

    async fn description(&self) -> &str {
        self.0.description()
    }

    /// Display label: "Not Started", "In Progress" or "Completed".
    async fn status(&self) -> String {
        self.0.status().to_string()
    }

    /// The owning client, or null when the reference dangles.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        let loader = ctx.data::<Arc<DataLoader<ClientLoader>>>()?;
        let client_data = loader
            .load_one(*self.0.client_id())
            .await
            .map_err(|err| gql_error(&Error::InternalServerError(err.to_string())))?;
        Ok(client_data.map(Client::from))
    }
}
