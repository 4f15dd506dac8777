use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveTable;

impl From<DeriveTable> for TokenStream2 {
    fn from(value: DeriveTable) -> Self {
        let DeriveTable {
            struct_name,
            fields,
        } = value;
        let fields = fields
            .into_iter()
            .map(TokenStream2::from)
            .collect::<Vec<_>>();

        quote! {
            impl ::getarg::prelude::FromArgs for #struct_name {
                #[allow(unused_variables)]
                fn from_table(
                    table: &::getarg::ArgumentTable,
                ) -> ::std::result::Result<Self, ::getarg::InvalidConversion> {
                    ::std::result::Result::Ok(Self {
                        #( #fields )*
                    })
                }
            }
        }
    }
}
