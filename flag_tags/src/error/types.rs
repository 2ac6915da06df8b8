//! Primary error enum for binding resolution and CLI application.

use std::fmt;

use thiserror::Error;

/// The primitive kinds a leaf field can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A `String` field.
    String,
    /// An `i64` field.
    Int,
    /// A `bool` field.
    Bool,
    /// An `f64` field.
    Float,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while resolving or applying flag bindings.
///
/// Every variant describes a static shape problem with the configuration
/// record or a failure reported by `clap`; none of them are transient.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// No record was supplied.
    #[error("nil value")]
    NilValue,

    /// The supplied value was not a mutable reference.
    #[error("argument must be a mutable reference to a record")]
    MustBePointer,

    /// The supplied reference did not point at a record.
    #[error("provided value was not a record")]
    InvalidStruct,

    /// The field is not visible outside its module and cannot be bound.
    #[error("private field: field '{field}' must be made public")]
    PrivateField {
        /// Name of the offending field.
        field: String,
    },

    /// A nested record field holds no value.
    #[error("nested records must be present, '{field}' was None")]
    NilNestedRecord {
        /// Name of the offending field.
        field: String,
    },

    /// The field's type has no binding rule.
    #[error("unsupported type: field '{field}' has type '{kind}' which is not supported")]
    UnsupportedType {
        /// Name of the offending field.
        field: String,
        /// Name of the unsupported type.
        kind: String,
    },

    /// The `value` annotation could not be parsed as the field's type.
    #[error("failed to parse value '{raw}' of field '{field}' as {kind}: {source}")]
    ValueParse {
        /// Name of the offending field.
        field: String,
        /// The literal taken from the `value` annotation.
        raw: String,
        /// The kind the literal was parsed as.
        kind: ValueKind,
        /// Underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// A parsed value could not be read back from the argument matches.
    #[error("failed to read value of flag '{flag}': {source}")]
    Extract {
        /// Flag whose value could not be extracted.
        flag: String,
        /// Underlying error reported by `clap`.
        #[source]
        source: clap::parser::MatchesError,
    },
}
