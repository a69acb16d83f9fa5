//! Domain types and pure helpers shared by the storage and HTTP layers.
//!
//! This crate has no database or web dependencies so the helpers here can be
//! unit tested in isolation.

pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
