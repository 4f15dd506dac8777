use crate::load::ATTRIBUTE;
use crate::model::{DeriveField, DeriveTable};

impl TryFrom<syn::DeriveInput> for DeriveTable {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        if let Some(attribute) = value
            .attrs
            .iter()
            .find(|attribute| attribute.path().is_ident(ATTRIBUTE))
        {
            return Err(syn::Error::new_spanned(
                attribute,
                format!("Invalid - `#[{ATTRIBUTE}(..)]` applies to fields only."),
            ));
        }

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - FromArgs cannot be derived for a generic struct.",
            ));
        }

        let struct_name = value.ident.clone();

        match &value.data {
            syn::Data::Struct(ds) => {
                let fields = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        .map(DeriveField::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct {
                        fields: syn::Fields::Unit,
                        ..
                    } => Vec::default(),
                    syn::DataStruct { .. } => {
                        return Err(syn::Error::new(
                            struct_name.span(),
                            "Invalid - FromArgs requires named fields.",
                        ));
                    }
                };

                Ok(DeriveTable {
                    struct_name,
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                "Invalid - FromArgs can only be derived for a struct.",
            )),
        }
    }
}
