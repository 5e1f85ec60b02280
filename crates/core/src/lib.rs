//! Domain types for the Histórico Domino client.
//!
//! This crate has no I/O: entity records and keys, list queries,
//! client-side pagination and the derived views computed over a fetched
//! collection. The HTTP layer lives in `histdom-client`.

pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod types;
pub mod views;
