//! Expansion of `#[derive(FlagTags)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

/// Parses `input` and generates its `Record` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (struct_attrs, fields) = parse::parse_input(input)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    Ok(generate::record_impl(input, &fields, &krate))
}
