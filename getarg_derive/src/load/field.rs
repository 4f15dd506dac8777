use quote::ToTokens;
use syn::ext::IdentExt;

use crate::load::ATTRIBUTE;
use crate::model::{DeriveField, DeriveValue, IntermediateAttributes};

const NAME: &str = "name";
const DEFAULT: &str = "default";

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(value, "Invalid - field must be named."))?;
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE) {
                attributes.extend(IntermediateAttributes::try_from(attribute)?);
            }
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(unknown_error(&field_name, singleton));
        }

        let IntermediateAttributes { mut pairs, .. } = attributes;
        let name = single_value(&field_name, NAME, pairs.remove(NAME))?;
        let default = single_value(&field_name, DEFAULT, pairs.remove(DEFAULT))?;

        if let Some(unknown) = pairs.keys().next() {
            return Err(unknown_error(&field_name, unknown));
        }

        let key = match name {
            Some(DeriveValue { tokens }) => {
                let literal: syn::LitStr = syn::parse2(tokens).map_err(|_| {
                    syn::Error::new(
                        field_name.span(),
                        format!("Invalid - `{NAME}` must be a string literal."),
                    )
                })?;
                dashed(&literal.value())
            }
            None => dashed(&field_name.unraw().to_string()),
        };

        Ok(DeriveField {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            key,
            default,
        })
    }
}

fn dashed(name: &str) -> String {
    if name.starts_with('-') {
        name.to_string()
    } else {
        format!("-{name}")
    }
}

fn single_value(
    field_name: &syn::Ident,
    attribute: &str,
    values: Option<Vec<DeriveValue>>,
) -> Result<Option<DeriveValue>, syn::Error> {
    match values {
        None => Ok(None),
        Some(mut values) => {
            if values.len() > 1 {
                Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - `{attribute}` may only be specified once."),
                ))
            } else {
                Ok(values.pop())
            }
        }
    }
}

fn unknown_error(field_name: &syn::Ident, attribute: &str) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!("Invalid - unknown attribute `{attribute}`."),
    )
}
