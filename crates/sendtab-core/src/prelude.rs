//! Prelude for common imports used throughout the sendtab crates

pub use crate::error::{Error, Result, ResultExt};
pub use tracing::{debug, error, info, trace, warn};
