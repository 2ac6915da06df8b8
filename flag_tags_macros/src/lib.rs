//! Procedural macros for `flag_tags`.
//!
//! The [`FlagTags`] derive implements `flag_tags::Record` for a struct with
//! named fields. Every field is listed in declaration order together with its
//! `#[flag(...)]` annotations, its visibility and a mutable borrow of its
//! storage, which the runtime resolver turns into flag bindings.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flag_tags::Record`.
///
/// Recognised field annotations:
///
/// - `name = "..."` overrides the inferred flag name;
/// - `env = "..."` overrides the inferred environment variable;
/// - `value = "..."` sets a default, parsed according to the field's type;
/// - `usage = "..."` sets the help text;
/// - `flatten` merges a nested record into its parent's namespace.
///
/// `#[flag(crate = "path")]` on the struct changes the path used to refer to
/// the runtime crate in generated code.
#[proc_macro_derive(FlagTags, attributes(flag))]
pub fn derive_flag_tags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
