//! Literal parsing helpers for `#[flag(...)]` attributes.

use syn::{Lit, LitBool, LitStr};

/// Parses a literal from an attribute using `extractor`, reporting `expected`
/// when the literal has the wrong kind.
fn parse_lit<T, F>(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
    expected: &str,
    extractor: F,
) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from an attribute.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a boolean literal from an attribute.
pub(crate) fn lit_bool(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<bool> {
    parse_lit(meta, key, "boolean", |lit| match lit {
        Lit::Bool(LitBool { value, .. }) => Some(value),
        _ => None,
    })
}
