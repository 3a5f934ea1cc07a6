use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),

    /// The request never produced a GraphQL response (connection, HTTP status, body decoding).
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The response carried an `errors` array.
    #[error("GraphQL request failed: {}", .0.join("; "))]
    Graphql(Vec<String>),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::BadRequest(_) => "BAD_REQUEST",
            Error::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            Error::Transport(_) => "TRANSPORT_ERROR",
            Error::Graphql(_) => "GRAPHQL_ERROR",
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::InternalServerError(err.to_string())
    }
}
