use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveField, DeriveValue};

impl From<DeriveField> for TokenStream2 {
    fn from(value: DeriveField) -> Self {
        let DeriveField {
            field_name,
            field_type: DeriveValue { tokens: field_type },
            key,
            default,
        } = value;
        let default = match default {
            Some(DeriveValue { tokens }) => quote! {
                ::std::option::Option::Some(::std::convert::Into::<#field_type>::into(#tokens))
            },
            None => quote! { ::std::option::Option::None },
        };

        quote! {
            #field_name: <#field_type as ::getarg::prelude::Lookup>::lookup(table, #key, #default)?,
        }
    }
}
