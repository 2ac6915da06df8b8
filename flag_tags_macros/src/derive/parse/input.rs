//! Input parsing for the `FlagTags` derive macro.
//!
//! Gathers the struct attributes and one [`ParsedField`] per named field in a
//! single pass so expansion fails fast on unsupported input.

use syn::{Data, DeriveInput, Fields, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed annotations.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    pub vis: Visibility,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

impl ParsedField {
    /// Fields without a visibility modifier cannot be bound.
    pub(crate) const fn is_accessible(&self) -> bool {
        !matches!(self.vis, Visibility::Inherited)
    }
}

/// Gathers information from the user-provided struct.
///
/// Tuple structs, unit structs, enums and unions are rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<(StructAttrs, Vec<ParsedField>)> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FlagTags requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FlagTags can only be derived for structs",
            ));
        }
    };

    let fields = named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "FlagTags requires named fields"))?;
            Ok(ParsedField {
                ident,
                vis: field.vis.clone(),
                ty: field.ty.clone(),
                attrs: parse_field_attrs(&field.attrs)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok((struct_attrs, fields))
}
