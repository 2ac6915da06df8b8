//! Crate path resolution for renamed dependencies.
//!
//! Converts the optional `#[flag(crate = "...")]` attribute value into the
//! tokens that prefix every `flag_tags` item in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the crate path from the parsed struct attribute.
///
/// Defaults to `::flag_tags` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::flag_tags }, |path| quote! { #path })
}
