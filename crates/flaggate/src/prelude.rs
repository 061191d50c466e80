pub use flaggate_core::prelude::*;

// vim: ts=4
