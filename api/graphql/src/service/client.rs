use async_graphql::{Context, Object, Result, ID};
use pm_dao::client::ClientDao;

use crate::{
    context::ApiGraphqlCtx,
    model::{client::Client, parse_id, store_error},
};

#[derive(Default)]
pub struct ClientQuery;

#[Object]
impl ClientQuery {
    /// Every client, oldest first.
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let clients_data = ClientDao::db_select_many(api_ctx.dao().db())
            .await
            .map_err(store_error)?;

        Ok(clients_data.into_iter().map(Client::from).collect())
    }

    async fn client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };

        let client_data = ClientDao::db_select(api_ctx.dao().db(), &id)
            .await
            .map_err(store_error)?;

        Ok(client_data.map(Client::from))
    }
}

#[derive(Default)]
pub struct ClientMutation;

#[Object]
impl ClientMutation {
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let client_data = ClientDao::new(&name, &email, &phone);
        client_data
            .db_insert(api_ctx.dao().db())
            .await
            .map_err(store_error)?;

        Ok(Client::from(client_data))
    }

    /// Removes the client together with every project that references it.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let api_ctx = ctx.data::<ApiGraphqlCtx>()?;

        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };

        let client_data = ClientDao::db_delete(api_ctx.dao().db(), &id)
            .await
            .map_err(store_error)?;

        Ok(client_data.map(Client::from))
    }
}
