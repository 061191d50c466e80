pub use flaggate_core::prelude::*;
pub use flaggate_types::extract::JsonBody;

// vim: ts=4
