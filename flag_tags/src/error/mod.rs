//! Error types produced while resolving flag bindings.

mod constructors;
mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{FlagError, ValueKind};

/// Convenience alias for results returned by this crate.
pub type FlagResult<T> = Result<T, FlagError>;
