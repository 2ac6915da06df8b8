//! Code generation for the `Record` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::ext::IdentExt;

use super::parse::ParsedField;

fn option_tokens(value: Option<&str>) -> TokenStream {
    value.map_or_else(
        || quote! { ::core::option::Option::None },
        |text| quote! { ::core::option::Option::Some(#text) },
    )
}

/// Builds the `Field` descriptor expression for one field.
///
/// `binding` is the local variable holding `&mut` to the field's storage.
/// Private fields never reach `FieldValue`, so their type needs no impl.
fn field_descriptor(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let binding = &field.ident;
    let name = field.ident.unraw().to_string();
    let attrs = &field.attrs;
    let flag_name = option_tokens(attrs.name.as_deref());
    let env = option_tokens(attrs.env.as_deref());
    let value = option_tokens(attrs.value.as_deref());
    let usage = option_tokens(attrs.usage.as_deref());
    let accessible = field.is_accessible();
    let embedded = attrs.flatten;
    let slot = if accessible {
        quote! { #krate::FieldValue::slot(#binding) }
    } else {
        let ty = &field.ty;
        quote! {{
            let _ = #binding;
            #krate::Slot::Unsupported(::core::any::type_name::<#ty>())
        }}
    };
    quote! {
        #krate::Field::new(#name, #slot)
            .with_annotations(#krate::Annotations {
                name: #flag_name,
                env: #env,
                value: #value,
                usage: #usage,
            })
            .accessible(#accessible)
            .embedded(#embedded)
    }
}

/// Generates `impl Record` for the derived struct.
///
/// The struct is destructured so that each descriptor holds a disjoint
/// mutable borrow of its field.
pub(crate) fn record_impl(
    input: &DeriveInput,
    fields: &[ParsedField],
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let bindings = fields.iter().map(|field| &field.ident);
    let descriptors = fields.iter().map(|field| field_descriptor(field, krate));

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                let Self { #( #bindings ),* } = self;
                ::std::vec![ #( #descriptors ),* ]
            }
        }
    }
}
