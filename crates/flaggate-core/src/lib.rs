//! Evaluation engine for Flaggate.
//!
//! Decides whether a named feature is active for a user. The subscription gate
//! normalises the user's subscription state, the resolver walks the override
//! chain (user, group, region, default), and the evaluation facade ties both
//! to the record store.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod evaluation;
pub mod prelude;
pub mod resolver;
pub mod subscription;

pub use app::{App, AppBuilderOpts, AppState, VERSION};
pub use evaluation::{Entitlements, entitlements, evaluate, evaluate_all, is_enabled_or_off};
pub use resolver::{OverrideSet, Policy, resolve};
pub use subscription::{ExpiryResolution, resolve_expiry, resolve_subscription, subscribe};

// vim: ts=4
