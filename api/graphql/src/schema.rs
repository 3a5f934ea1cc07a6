use std::sync::Arc;

use async_graphql::{
    dataloader::DataLoader, extensions::Tracing, EmptySubscription, MergedObject, Schema,
};

use crate::{
    context::ApiGraphqlCtx,
    loader::ClientLoader,
    service::{
        client::{ClientMutation, ClientQuery},
        project::{ProjectMutation, ProjectQuery},
    },
};

#[derive(MergedObject, Default)]
pub struct QueryRoot(ClientQuery, ProjectQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClientMutation, ProjectMutation);

pub type ProjmanSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(ctx: ApiGraphqlCtx) -> ProjmanSchema {
    let client_loader = Arc::new(DataLoader::new(
        ClientLoader::new(ctx.dao().db_shared()),
        tokio::spawn,
    ));
    build_schema_with_loader(ctx, client_loader)
}

fn build_schema_with_loader(
    ctx: ApiGraphqlCtx,
    client_loader: Arc<DataLoader<ClientLoader>>,
) -> ProjmanSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .extension(Tracing)
    .data(ctx)
    .data(client_loader)
    .finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_graphql::dataloader::DataLoader;
    use pm_dao::{
        client::ClientDao,
        project::{ProjectDao, ProjectStatus},
        Db,
    };
    use pm_db_memory::db::MemoryDb;

    use super::build_schema_with_loader;
    use crate::{
        context::{ApiGraphqlCtx, ApiGraphqlDaoCtx},
        loader::ClientLoader,
    };

    #[tokio::test]
    async fn nested_clients_load_in_one_batch_per_request() {
        let db = Arc::new(Db::MemoryDb(MemoryDb::new()));
        for i in 0..3 {
            let client_data = ClientDao::new(&format!("client {i}"), "e@example.com", "555");
            client_data.db_insert(&db).await.unwrap();
            for j in 0..2 {
                ProjectDao::new(
                    &format!("project {i}.{j}"),
                    "d",
                    &ProjectStatus::NotStarted,
                    client_data.id(),
                )
                .db_insert(&db)
                .await
                .unwrap();
            }
        }

        let client_loader = Arc::new(DataLoader::new(
            ClientLoader::new(db.clone()),
            tokio::spawn,
        ));
        let schema = build_schema_with_loader(
            ApiGraphqlCtx::new(ApiGraphqlDaoCtx::new(db)),
            client_loader.clone(),
        );

        let res = schema.execute("{ projects { client { name } } }").await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(client_loader.loader().batches(), 1);

        let res = schema.execute("{ projects { client { name } } }").await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(client_loader.loader().batches(), 2);
    }
}
