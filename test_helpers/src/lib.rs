//! Test helpers shared across the flag-tags workspace.
//!
//! Flag resolution falls back to environment variables when a flag is not
//! passed, so tests that exercise that path need serialised, restorable
//! access to the process environment. See [`env`].

pub mod env;
