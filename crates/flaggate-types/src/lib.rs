//! Shared types, adapter traits, and core utilities for Flaggate.
//!
//! This crate contains the foundational types that are shared between the
//! evaluation engine, the HTTP layer and the record store adapters. Keeping
//! them in a separate crate lets adapter crates compile without pulling in
//! the server.

pub mod error;
pub mod extract;
pub mod prelude;
pub mod record_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
