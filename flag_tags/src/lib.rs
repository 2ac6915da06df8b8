//! Derive command-line flags and environment variables from configuration
//! structs.
//!
//! `#[derive(FlagTags)]` describes every field of a struct to the resolver,
//! which turns each leaf field into a [`Binding`]: a flag name, an
//! environment variable, a typed default, help text and a mutable reference
//! to the field. Bindings convert into [`clap::Arg`]s, and parsed values are
//! written straight back into the struct.
//!
//! ```
//! use clap::Command;
//! use flag_tags::{Bindings, FlagTags, Options};
//!
//! #[derive(FlagTags, Default)]
//! struct Config {
//!     #[flag(value = "3001")]
//!     pub port: i64,
//!     #[flag(usage = "Disable authentication")]
//!     pub disable_auth: bool,
//!     #[flag(name = "pghost", env = "PGHOST", usage = "Postgres hostname")]
//!     pub database_host: String,
//! }
//!
//! let mut config = Config::default();
//! let options = Options::default().with_env_prefix("EXAMPLE_");
//! let mut bindings = Bindings::resolve(&mut config, &options)?;
//! bindings.parse_from(Command::new("server"), ["server", "--pghost", "db.local"])?;
//! drop(bindings);
//!
//! assert_eq!(config.port, 3001);
//! assert_eq!(config.database_host, "db.local");
//! # Ok::<(), flag_tags::FlagError>(())
//! ```
//!
//! Field names are converted with [`case::to_kebab_case`] for flags and
//! [`case::to_screaming_snake_case`] for environment variables. Nested
//! records prefix their children with the field name unless marked
//! `#[flag(flatten)]`.

pub use flag_tags_macros::FlagTags;

mod binding;
pub mod case;
mod cli;
mod error;
mod options;
mod record;
mod resolve;
mod target;

pub use binding::{Binding, BoundValue};
pub use cli::Bindings;
pub use error::{FlagError, FlagResult, ValueKind, is_display_request};
pub use options::Options;
pub use record::{Annotations, Field, FieldValue, Record, Slot};
pub use resolve::{resolve, resolve_with};
pub use target::Target;
