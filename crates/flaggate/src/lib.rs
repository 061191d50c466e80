//! Flaggate is a feature flag service with subscription gating.
//!
//! # Features
//!
//! - Named boolean feature flags with a global default
//! - Overrides per user, per group and per region, upserted by key
//! - Subscription expiry with lazy correction on evaluation
//! - Two precedence policies
//!     - `gated`: an inactive subscription blocks every feature
//!     - `ungated`: overrides apply to everyone, only the subscriber group
//!       follows the subscription
//! - Region-scoped title catalog unlocked by a feature
//!
//! The record store is pluggable through
//! [`record_adapter::RecordAdapter`]. `flaggate-record-adapter-sqlite` is the
//! bundled implementation.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub use flaggate_types::error;
pub use flaggate_types::record_adapter;
pub use flaggate_types::types;
pub use flaggate_types::utils;

pub use flaggate_api as api;
pub use flaggate_core::evaluation;
pub use flaggate_core::resolver;
pub use flaggate_core::subscription;

pub mod app;
pub mod prelude;
pub mod routes;

pub use app::{App, AppBuilder, AppBuilderOpts, AppState, VERSION};
pub use resolver::Policy;

// vim: ts=4
