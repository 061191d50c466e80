pub use crate::app::App;
pub use flaggate_types::error::{Error, FgResult};
pub use flaggate_types::types::{Source, UserId, Verdict};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
