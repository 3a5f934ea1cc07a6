//! Client-side query layer.
//!
//! [`ApiClient`] issues the named documents in [`query`] through a
//! [`Transport`], keeps a response cache keyed by operation and variables,
//! and refreshes affected queries after every mutation.

pub mod cache;
pub mod client;
pub mod model;
pub mod query;
pub mod transport;

pub use client::ApiClient;
pub use transport::{HttpTransport, Transport};
