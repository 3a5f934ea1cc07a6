use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use async_graphql::{ErrorExtensions, ID};
use pm_error::Error;
use serde::Serialize;
use uuid::Uuid;

pub mod client;
pub mod project;

/// GraphQL-shaped envelope for errors raised outside the executor.
#[derive(Serialize)]
pub struct Response {
    data: Option<()>,
    errors: Vec<ErrorRes>,
}

impl Response {
    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        let message = match message.trim() {
            "" => status_code.canonical_reason().unwrap_or("Unknown error"),
            message => message,
        };

        if status_code.is_server_error() {
            pm_log::error(None, message);
        } else {
            pm_log::debug(None, format!("[ApiGraphqlServer] {status_code}: {message}"));
        }

        HttpResponseBuilder::new(*status_code).json(Self {
            data: None,
            errors: vec![ErrorRes {
                message: message.to_owned(),
                extensions: ErrorExtensionsRes {
                    code: status_code_name(status_code),
                },
            }],
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    message: String,
    extensions: ErrorExtensionsRes,
}

#[derive(Serialize)]
pub struct ErrorExtensionsRes {
    code: String,
}

#[derive(Serialize)]
pub struct HealthRes {
    status: &'static str,
}

impl HealthRes {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// "Not Found" -> "NOT_FOUND"
fn status_code_name(status_code: &StatusCode) -> String {
    match status_code.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
        None => "UNKNOWN".to_owned(),
    }
}

/// A string that is not a UUID cannot name a stored record.
pub fn parse_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

pub fn gql_error(err: &Error) -> async_graphql::Error {
    match err {
        Error::InternalServerError(_) => pm_log::error(None, err),
        _ => pm_log::debug(None, err),
    }

    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub fn store_error(err: anyhow::Error) -> async_graphql::Error {
    gql_error(&Error::from(err))
}
