//! Helpers for classifying errors reported by `clap`.

use clap::{Error as ClapError, error::ErrorKind};

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap reports these requests through dedicated [`ErrorKind`] variants.
/// Entry points that parse with [`crate::Bindings::parse_from`] can check
/// for them and call [`clap::Error::exit`] to keep the zero exit status.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
