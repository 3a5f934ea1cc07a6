use pm_error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    cache::{CacheKey, QueryCache},
    model::{Client, Project, ProjectPatch, ProjectStatus},
    query::{
        Operation, ADD_CLIENT, ADD_PROJECT, DELETE_CLIENT, DELETE_PROJECT, GET_CLIENT,
        GET_CLIENTS, GET_PROJECT, GET_PROJECTS, UPDATE_PROJECT,
    },
    transport::{GraphQlRequest, Transport},
};

/// A query to re-run after a mutation so its cache entry reflects the write.
#[derive(Debug, Clone)]
pub struct RefetchQuery {
    operation: Operation,
    variables: Value,
}

impl RefetchQuery {
    pub fn new(operation: &Operation, variables: Value) -> Self {
        Self {
            operation: *operation,
            variables,
        }
    }
}

pub struct ApiClient<T: Transport> {
    transport: T,
    cache: QueryCache,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Cache-first: only a miss reaches the transport.
    pub async fn query(&self, operation: &Operation, variables: Value) -> Result<Value> {
        let key = CacheKey::new(operation, &variables);
        if let Some(data) = self.cache.get(&key).await {
            pm_log::trace(None, format!("[ApiClient] Cache hit for {}", operation.name()));
            return Ok(data);
        }

        let data = self.fetch(operation, variables).await?;
        self.cache.insert(key, data.clone()).await;
        Ok(data)
    }

    /// Sends the mutation, then re-runs every `refetch` query and stores the
    /// fresh result. A refetch that fails drops its entry instead, so the
    /// next `query` goes to the network.
    pub async fn mutate(
        &self,
        operation: &Operation,
        variables: Value,
        refetch: &[RefetchQuery],
    ) -> Result<Value> {
        let data = self.fetch(operation, variables).await?;

        for query in refetch {
            let key = CacheKey::new(&query.operation, &query.variables);
            match self.fetch(&query.operation, query.variables.clone()).await {
                Ok(fresh) => self.cache.insert(key, fresh).await,
                Err(err) => {
                    pm_log::warn(
                        None,
                        format!(
                            "[ApiClient] Refetching {} failed, evicting it: {err}",
                            query.operation.name()
                        ),
                    );
                    self.cache.remove(&key).await;
                }
            }
        }

        Ok(data)
    }

    pub async fn evict(&self, operation: &Operation, variables: &Value) -> bool {
        self.cache.remove(&CacheKey::new(operation, variables)).await
    }

    pub async fn clear(&self) {
        self.cache.clear().await;
    }

    pub async fn clients(&self) -> Result<Vec<Client>> {
        field(self.query(&GET_CLIENTS, json!({})).await?, "clients")
    }

    pub async fn client(&self, id: &str) -> Result<Option<Client>> {
        field(self.query(&GET_CLIENT, json!({ "id": id })).await?, "client")
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        field(self.query(&GET_PROJECTS, json!({})).await?, "projects")
    }

    pub async fn project(&self, id: &str) -> Result<Option<Project>> {
        field(self.query(&GET_PROJECT, json!({ "id": id })).await?, "project")
    }

    pub async fn add_client(&self, name: &str, email: &str, phone: &str) -> Result<Client> {
        let data = self
            .mutate(
                &ADD_CLIENT,
                json!({ "name": name, "email": email, "phone": phone }),
                &[RefetchQuery::new(&GET_CLIENTS, json!({}))],
            )
            .await?;
        field(data, "addClient")
    }

    /// Projects go with the client, so both lists are refetched and any
    /// cached single-record lookups are dropped.
    pub async fn delete_client(&self, id: &str) -> Result<Option<Client>> {
        let data = self
            .mutate(
                &DELETE_CLIENT,
                json!({ "id": id }),
                &[
                    RefetchQuery::new(&GET_CLIENTS, json!({})),
                    RefetchQuery::new(&GET_PROJECTS, json!({})),
                ],
            )
            .await?;
        self.cache.remove_operation(&GET_CLIENT).await;
        self.cache.remove_operation(&GET_PROJECT).await;
        field(data, "deleteClient")
    }

    /// `status: None` lets the server apply its default.
    pub async fn add_project(
        &self,
        name: &str,
        description: &str,
        status: Option<ProjectStatus>,
        client_id: &str,
    ) -> Result<Project> {
        let mut variables = json!({
            "name": name,
            "description": description,
            "clientId": client_id,
        });
        if let Some(status) = status {
            variables["status"] = json!(status);
        }

        let data = self
            .mutate(
                &ADD_PROJECT,
                variables,
                &[RefetchQuery::new(&GET_PROJECTS, json!({}))],
            )
            .await?;
        field(data, "addProject")
    }

    pub async fn delete_project(&self, id: &str) -> Result<Option<Project>> {
        let data = self
            .mutate(
                &DELETE_PROJECT,
                json!({ "id": id }),
                &[RefetchQuery::new(&GET_PROJECTS, json!({}))],
            )
            .await?;
        self.evict(&GET_PROJECT, &json!({ "id": id })).await;
        field(data, "deleteProject")
    }

    pub async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<Option<Project>> {
        let mut variables = json!(patch);
        variables["id"] = json!(id);

        let data = self
            .mutate(
                &UPDATE_PROJECT,
                variables,
                &[
                    RefetchQuery::new(&GET_PROJECTS, json!({})),
                    RefetchQuery::new(&GET_PROJECT, json!({ "id": id })),
                ],
            )
            .await?;
        field(data, "updateProject")
    }

    async fn fetch(&self, operation: &Operation, variables: Value) -> Result<Value> {
        pm_log::debug(None, format!("[ApiClient] Sending {}", operation.name()));
        self.transport
            .send(&GraphQlRequest::new(operation, variables))
            .await?
            .into_result()
    }
}

fn field<D: DeserializeOwned>(data: Value, name: &str) -> Result<D> {
    let value = match data {
        Value::Object(mut map) => map.remove(name).unwrap_or(Value::Null),
        _ => Value::Null,
    };
    serde_json::from_value(value)
        .map_err(|err| Error::Transport(format!("Unexpected shape for '{name}': {err}")))
}
