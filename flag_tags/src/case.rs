//! Identifier case conversion used to infer flag and environment names.
//!
//! Field names are split into words at ASCII capitals, so both `HostURL` and
//! `host_url` map to the same flag (`host-url`) and environment variable
//! (`HOST_URL`). Acronym runs stay together: `HTTPRequest` becomes
//! `http_request`.

/// Converts an identifier to `snake_case`.
///
/// An underscore is inserted before an ASCII capital letter when the capital
/// follows a lowercase letter or digit, or when it starts a lowercase run and
/// is not the first character. Existing separators are kept verbatim and the
/// result is lowercased.
///
/// # Examples
///
/// ```
/// use flag_tags::case::to_snake_case;
///
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// assert_eq!(to_snake_case("ID0Value"), "id0_value");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
#[must_use]
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut prev: Option<char> = None;
    let mut chars = identifier.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_uppercase() {
            if let Some(before) = prev {
                let after_lower_or_digit =
                    before.is_ascii_lowercase() || before.is_ascii_digit();
                let starts_word = chars.peek().is_some_and(char::is_ascii_lowercase);
                if after_lower_or_digit || starts_word {
                    out.push('_');
                }
            }
        }
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    out
}

/// Converts an identifier to `kebab-case`.
///
/// ```
/// use flag_tags::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case("HostURL"), "host-url");
/// assert_eq!(to_kebab_case("grpc_enabled"), "grpc-enabled");
/// ```
#[must_use]
pub fn to_kebab_case(identifier: &str) -> String {
    to_snake_case(identifier).replace('_', "-")
}

/// Converts an identifier to `SCREAMING_SNAKE_CASE`.
///
/// ```
/// use flag_tags::case::to_screaming_snake_case;
///
/// assert_eq!(to_screaming_snake_case("HostURL"), "HOST_URL");
/// ```
#[must_use]
pub fn to_screaming_snake_case(identifier: &str) -> String {
    to_snake_case(identifier).to_uppercase()
}
