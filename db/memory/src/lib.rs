//! In-process document store.
//!
//! Both collections live behind a single lock so multi-collection writes
//! (the client cascade) are observed atomically by concurrent readers.

pub mod db;
pub mod model;
