pub mod client;
pub mod graphql;
pub mod health;
pub mod project;
