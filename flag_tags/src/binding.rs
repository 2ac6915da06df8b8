//! Resolved bindings between record fields and flags.

use crate::ValueKind;

/// A leaf field resolved into a flag name, environment variable, default
/// value, usage text and writable storage.
#[derive(Debug)]
#[non_exhaustive]
pub struct Binding<'a> {
    /// Long flag name, including any flag prefix.
    pub flag_name: String,
    /// Environment variable name, including any env prefix.
    pub env_name: String,
    /// Help text; empty when no `usage` annotation was given.
    pub usage: String,
    /// Typed default and storage.
    pub value: BoundValue<'a>,
}

/// The typed default of a [`Binding`] together with the field it writes to.
#[derive(Debug)]
pub enum BoundValue<'a> {
    /// A `String` field.
    String {
        /// Value used when neither the flag nor the env var is set.
        default: String,
        /// The bound field.
        storage: &'a mut String,
    },
    /// An `i64` field.
    Int {
        /// Value used when neither the flag nor the env var is set.
        default: i64,
        /// The bound field.
        storage: &'a mut i64,
    },
    /// A `bool` field.
    Bool {
        /// Value used when neither the flag nor the env var is set.
        default: bool,
        /// The bound field.
        storage: &'a mut bool,
    },
    /// An `f64` field.
    Float {
        /// Value used when neither the flag nor the env var is set.
        default: f64,
        /// The bound field.
        storage: &'a mut f64,
    },
}

impl BoundValue<'_> {
    /// Returns the kind of value this binding holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String { .. } => ValueKind::String,
            Self::Int { .. } => ValueKind::Int,
            Self::Bool { .. } => ValueKind::Bool,
            Self::Float { .. } => ValueKind::Float,
        }
    }

    /// Renders the default value the way it is shown in help output.
    #[must_use]
    pub fn default_string(&self) -> String {
        match self {
            Self::String { default, .. } => default.clone(),
            Self::Int { default, .. } => default.to_string(),
            Self::Bool { default, .. } => default.to_string(),
            Self::Float { default, .. } => default.to_string(),
        }
    }

    /// Writes the default value into the bound field.
    pub fn reset(&mut self) {
        match self {
            Self::String { default, storage } => storage.clone_from(default),
            Self::Int { default, storage } => **storage = *default,
            Self::Bool { default, storage } => **storage = *default,
            Self::Float { default, storage } => **storage = *default,
        }
    }
}

impl<'a> Binding<'a> {
    pub(crate) const fn new(
        flag_name: String,
        env_name: String,
        usage: String,
        value: BoundValue<'a>,
    ) -> Self {
        Self {
            flag_name,
            env_name,
            usage,
            value,
        }
    }

    /// Returns the kind of value this binding holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}
