extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveTable;

#[proc_macro_derive(FromArgs, attributes(getarg))]
pub fn from_args(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveTable::try_from(input) {
        Ok(table) => TokenStream2::from(table).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
