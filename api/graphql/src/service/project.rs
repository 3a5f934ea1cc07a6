use async_graphql::{Context, Object, Result, ID};
use pm_dao::project::ProjectDao;
use pm_error::Error;

use crate::{
    context::ApiGraphqlCtx,
    model::{
        gql_error, parse_id,
        project::{Project, ProjectStatus},
        store_error,
    },
};

#[derive(Default)]
pub struct ProjectQuery;

#[Object]
impl ProjectQuery {
    /// Every project, oldest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let projects_data = ProjectDao::db_select_many(api_ctx.dao().db())
            .await
            .map_err(store_error)?;

        Ok(projects_data.into_iter().map(Project::from).collect())
    }

    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };

        let project_data = ProjectDao::db_select(api_ctx.dao().db(), &id)
            .await
            .map_err(store_error)?;

        Ok(project_data.map(Project::from))
    }
}

#[derive(Default)]
pub struct ProjectMutation;

#[Object]
impl ProjectMutation {
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(default)] status: ProjectStatus,
        client_id: ID,
    ) -> Result<Project> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(client_id) = parse_id(&client_id) else {
            return Err(gql_error(&Error::BadRequest(format!(
                "Invalid client id '{}'",
                client_id.as_str()
            ))));
        };

        let project_data = ProjectDao::new(&name, &description, &status.into(), &client_id);
        project_data
            .db_insert(api_ctx.dao().db())
            .await
            .map_err(store_error)?;

        Ok(Project::from(project_data))
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };

        let project_data = ProjectDao::db_delete(api_ctx.dao().db(), &id)
            .await
            .map_err(store_error)?;

        Ok(project_data.map(Project::from))
    }

    /// Changes only the supplied fields and returns the updated project.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Result<Option<Project>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };

        let Some(mut project_data) = ProjectDao::db_select(api_ctx.dao().db(), &id)
            .await
            .map_err(store_error)?
        else {
            return Ok(None);
        };

        if let Some(name) = &name {
            project_data.set_name(name);
        }
        if let Some(description) = &description {
            project_data.set_description(description);
        }
        if let Some(status) = status {
            project_data.set_status(&status.into());
        }

        // Deleted between the read and the write.
        if !project_data
            .db_update(api_ctx.dao().db())
            .await
            .map_err(store_error)?
        {
            return Ok(None);
        }

        Ok(Some(Project::from(project_data)))
    }
}
