//! Prefix options applied while resolving bindings.

/// Prefixes prepended to every flag and environment variable name.
///
/// Prefixes are applied verbatim; no separator is added. Nested records
/// extend a copy of the parent's options, so a child's prefix never leaks
/// into its siblings.
///
/// # Examples
///
/// ```
/// use flag_tags::Options;
///
/// let options = Options::default().with_env_prefix("MYAPP_");
/// assert_eq!(options.env_prefix, "MYAPP_");
/// assert!(options.flag_prefix.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Put in front of each environment variable, e.g. `MYAPP_` gives
    /// `MYAPP_MY_FIELD`.
    pub env_prefix: String,
    /// Put in front of each flag, e.g. `myapp-` gives `myapp-my-field`.
    pub flag_prefix: String,
}

impl Options {
    /// Sets the environment variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Sets the flag prefix.
    #[must_use]
    pub fn with_flag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.flag_prefix = prefix.into();
        self
    }

    /// Returns the options used for a named nested record.
    pub(crate) fn nested(&self, flag_segment: &str, env_segment: &str) -> Self {
        Self {
            env_prefix: format!("{}{env_segment}_", self.env_prefix),
            flag_prefix: format!("{}{flag_segment}-", self.flag_prefix),
        }
    }
}
