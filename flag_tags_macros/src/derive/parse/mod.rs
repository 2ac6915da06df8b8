//! Parsing utilities for the `FlagTags` derive macro.

use syn::{Attribute, Token, parenthesized};

mod input;
mod literals;

pub(crate) use input::{ParsedField, parse_input};
use literals::{lit_bool, lit_str};

/// Struct-level attributes recognised by `#[derive(FlagTags)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(FlagTags)]`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub name: Option<String>,
    pub env: Option<String>,
    pub value: Option<String>,
    pub usage: Option<String>,
    pub flatten: bool,
}

/// Iterate all `#[flag(...)]` attributes once and apply a callback.
fn parse_flag<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Parses struct-level `#[flag(...)]` attributes.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flag(attrs, |meta| {
        if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_str(meta, "crate")?.parse()?);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[flag(...)]` attributes.
///
/// Later occurrences of a key replace earlier ones. `flatten` may be written
/// bare or as `flatten = true`.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_flag(attrs, |meta| {
        let Some(ident) = meta.path.get_ident().map(ToString::to_string) else {
            return discard_unknown(meta);
        };
        match ident.as_str() {
            "name" => out.name = Some(lit_str(meta, "name")?.value()),
            "env" => out.env = Some(lit_str(meta, "env")?.value()),
            "value" => out.value = Some(lit_str(meta, "value")?.value()),
            "usage" => out.usage = Some(lit_str(meta, "usage")?.value()),
            "flatten" => {
                out.flatten = if meta.input.peek(Token![=]) {
                    lit_bool(meta, "flatten")?
                } else {
                    true
                };
            }
            _ => discard_unknown(meta)?,
        }
        Ok(())
    })?;
    Ok(out)
}
