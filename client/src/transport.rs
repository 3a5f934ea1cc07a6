use std::future::Future;

use pm_error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::Operation;

#[derive(Serialize, Debug, Clone)]
pub struct GraphQlRequest {
    query: &'static str,
    variables: Value,
    #[serde(rename = "operationName")]
    operation_name: &'static str,
}

impl GraphQlRequest {
    pub fn new(operation: &Operation, variables: Value) -> Self {
        Self {
            query: operation.document(),
            variables,
            operation_name: operation.name(),
        }
    }

    pub fn query(&self) -> &'static str {
        self.query
    }

    pub fn variables(&self) -> &Value {
        &self.variables
    }

    pub fn operation_name(&self) -> &'static str {
        self.operation_name
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorRes>,
}

impl GraphQlResponse {
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn errors(messages: &[&str]) -> Self {
        Self {
            data: None,
            errors: messages
                .iter()
                .map(|message| GraphQlErrorRes {
                    message: (*message).to_owned(),
                })
                .collect(),
        }
    }

    /// Any `errors` entry fails the whole response.
    pub fn into_result(self) -> Result<Value> {
        if !self.errors.is_empty() {
            return Err(Error::Graphql(
                self.errors.into_iter().map(|err| err.message).collect(),
            ));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GraphQlErrorRes {
    message: String,
}

pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &GraphQlRequest,
    ) -> impl Future<Output = Result<GraphQlResponse>> + Send;
}

/// Posts requests as JSON to a single GraphQL endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &GraphQlRequest) -> Result<GraphQlResponse> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        // Error statuses still carry the GraphQL envelope, so decode regardless.
        let status = res.status();
        res.json::<GraphQlResponse>()
            .await
            .map_err(|err| Error::Transport(format!("{status}: {err}")))
    }
}
