//! `clap` integration for resolved bindings.
//!
//! Each [`Binding`] maps to one [`clap::Arg`] whose id and long name are the
//! binding's flag name and whose environment variable is the binding's env
//! name. After parsing, [`Binding::assign`] writes the matched value (or the
//! default) back into the bound field.

use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::binding::{Binding, BoundValue};
use crate::{FlagError, FlagResult, Options, Target};

impl Binding<'_> {
    /// Builds the `clap` argument for this binding.
    ///
    /// Boolean flags take an optional value: `--verbose` sets `true`, while
    /// `--verbose=false` and `VERBOSE=0` set `false`.
    #[must_use]
    pub fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.flag_name.clone())
            .long(self.flag_name.clone())
            .env(self.env_name.clone())
            .action(ArgAction::Set);
        if !self.usage.is_empty() {
            arg = arg.help(self.usage.clone());
        }

        match &self.value {
            BoundValue::String { default, .. } => {
                arg = arg.value_parser(value_parser!(String));
                if !default.is_empty() {
                    arg = arg.default_value(default.clone());
                }
                arg
            }
            BoundValue::Int { default, .. } => arg
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value(default.to_string()),
            BoundValue::Float { default, .. } => arg
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value(default.to_string()),
            BoundValue::Bool { default, .. } => arg
                .value_parser(BoolishValueParser::new())
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .default_value(default.to_string()),
        }
    }

    /// Writes the value matched for this binding into the bound field.
    ///
    /// Falls back to the binding's default when `matches` holds no value.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Extract`] when `matches` was not produced by a
    /// command containing [`Self::to_arg`].
    pub fn assign(&mut self, matches: &ArgMatches) -> FlagResult<()> {
        let id = self.flag_name.as_str();
        let extract = |source| FlagError::extract(id, source);
        match &mut self.value {
            BoundValue::String { default, storage } => {
                **storage = matches
                    .try_get_one::<String>(id)
                    .map_err(extract)?
                    .map_or_else(|| default.clone(), Clone::clone);
            }
            BoundValue::Int { default, storage } => {
                **storage = matches
                    .try_get_one::<i64>(id)
                    .map_err(extract)?
                    .copied()
                    .unwrap_or(*default);
            }
            BoundValue::Bool { default, storage } => {
                **storage = matches
                    .try_get_one::<bool>(id)
                    .map_err(extract)?
                    .copied()
                    .unwrap_or(*default);
            }
            BoundValue::Float { default, storage } => {
                **storage = matches
                    .try_get_one::<f64>(id)
                    .map_err(extract)?
                    .copied()
                    .unwrap_or(*default);
            }
        }
        Ok(())
    }
}

/// The ordered bindings of one record.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use flag_tags::{Bindings, FlagTags, Options};
///
/// #[derive(FlagTags, Default)]
/// struct Config {
///     #[flag(value = "3001")]
///     pub port: i64,
///     pub disable_auth: bool,
/// }
///
/// let mut config = Config::default();
/// let options = Options::default().with_env_prefix("EXAMPLE_");
/// let mut bindings = Bindings::resolve(&mut config, &options)?;
/// bindings.parse_from(Command::new("server"), ["server", "--disable-auth"])?;
/// drop(bindings);
///
/// assert_eq!(config.port, 3001);
/// assert!(config.disable_auth);
/// # Ok::<(), flag_tags::FlagError>(())
/// ```
#[derive(Debug, Default)]
pub struct Bindings<'a> {
    inner: Vec<Binding<'a>>,
}

impl<'a> Bindings<'a> {
    /// Resolves `target` into bindings.
    ///
    /// # Errors
    ///
    /// See [`crate::resolve_with`].
    pub fn resolve<T: Target<'a>>(target: T, options: &Options) -> FlagResult<Self> {
        crate::resolve_with(target, options).map(Self::from)
    }

    /// Returns the `clap` argument of every binding, in order.
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.inner.iter().map(Binding::to_arg)
    }

    /// Adds the arguments of every binding to `command`.
    ///
    /// # Panics
    ///
    /// Flag names are not checked for collisions. When two bindings share a
    /// flag name, for instance through a `name` override or a flattened
    /// child, `clap` panics in debug builds once the command is built.
    #[must_use]
    pub fn augment(&self, command: Command) -> Command {
        command.args(self.args())
    }

    /// Writes the values in `matches` into the bound fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`FlagError::Extract`] raised by
    /// [`Binding::assign`].
    pub fn apply(&mut self, matches: &ArgMatches) -> FlagResult<()> {
        self.inner
            .iter_mut()
            .try_for_each(|binding| binding.assign(matches))
    }

    /// Parses `args` with `command` augmented by these bindings and applies
    /// the result. The matches are returned so callers can read any
    /// arguments the command declares itself.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::CliParsing`] when `clap` rejects the arguments,
    /// including `--help` and `--version` requests (see
    /// [`crate::is_display_request`]).
    ///
    /// # Panics
    ///
    /// Panics in debug builds when two bindings share a flag name; see
    /// [`Self::augment`].
    pub fn parse_from<I, S>(&mut self, command: Command, args: I) -> FlagResult<ArgMatches>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let matches = self.augment(command).try_get_matches_from(args)?;
        self.apply(&matches)?;
        Ok(matches)
    }

    /// Number of bindings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when the record has no leaf fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the bindings in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Binding<'a>> {
        self.inner.iter()
    }

    /// Returns the underlying bindings.
    #[must_use]
    pub fn into_inner(self) -> Vec<Binding<'a>> {
        self.inner
    }
}

impl<'a> From<Vec<Binding<'a>>> for Bindings<'a> {
    fn from(inner: Vec<Binding<'a>>) -> Self {
        Self { inner }
    }
}

impl<'a> IntoIterator for Bindings<'a> {
    type Item = Binding<'a>;
    type IntoIter = std::vec::IntoIter<Binding<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'b, 'a> IntoIterator for &'b Bindings<'a> {
    type Item = &'b Binding<'a>;
    type IntoIter = std::slice::Iter<'b, Binding<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
