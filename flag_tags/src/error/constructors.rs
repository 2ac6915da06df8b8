//! Constructors for field-level `FlagError` variants.

use super::{FlagError, ValueKind};

impl FlagError {
    /// Construct a private field error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flag_tags::FlagError;
    /// let e = FlagError::private_field("name");
    /// assert!(matches!(e, FlagError::PrivateField { .. }));
    /// ```
    #[must_use]
    pub fn private_field(field: &str) -> Self {
        Self::PrivateField {
            field: field.to_owned(),
        }
    }

    /// Construct an error for a nested record field holding `None`.
    #[must_use]
    pub fn nil_nested_record(field: &str) -> Self {
        Self::NilNestedRecord {
            field: field.to_owned(),
        }
    }

    /// Construct an error for a field whose type has no binding rule.
    #[must_use]
    pub fn unsupported_type(field: &str, kind: &str) -> Self {
        Self::UnsupportedType {
            field: field.to_owned(),
            kind: kind.to_owned(),
        }
    }

    /// Construct an error for a `value` annotation that failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use flag_tags::{FlagError, ValueKind};
    /// let source = "x".parse::<i64>().unwrap_err();
    /// let e = FlagError::value_parse("port", "x", ValueKind::Int, source);
    /// assert!(matches!(e, FlagError::ValueParse { kind: ValueKind::Int, .. }));
    /// ```
    #[must_use]
    pub fn value_parse<E>(field: &str, raw: &str, kind: ValueKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ValueParse {
            field: field.to_owned(),
            raw: raw.to_owned(),
            kind,
            source: Box::new(source),
        }
    }

    /// Construct an error for a value that could not be read back from
    /// `clap` matches.
    #[must_use]
    pub fn extract(flag: &str, source: clap::parser::MatchesError) -> Self {
        Self::Extract {
            flag: flag.to_owned(),
            source,
        }
    }
}

impl From<clap::Error> for FlagError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}
