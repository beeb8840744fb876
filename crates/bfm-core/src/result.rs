//! Result alias over the core error type.

use crate::Error;

/// Result type used throughout the dispatch core.
pub type Result<T, E = Error> = std::result::Result<T, E>;
