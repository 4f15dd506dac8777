use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut attributes = IntermediateAttributes::default();

        for expression in value.parse_args_with(attributes_parser)? {
            attributes.push(expression)?;
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    fn push(&mut self, expression: syn::Expr) -> Result<(), syn::Error> {
        match expression {
            syn::Expr::Assign(assignment) => {
                let left = assignment.left.to_token_stream();
                self.pairs
                    .entry(left.to_string())
                    .or_default()
                    .push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                Ok(())
            }
            syn::Expr::Path(ref path) => match path.path.get_ident() {
                Some(ident) => {
                    self.singletons.insert(ident.to_string());
                    Ok(())
                }
                None => Err(syn::Error::new_spanned(
                    &expression,
                    "Invalid - unparseable attribute.",
                )),
            },
            _ => Err(syn::Error::new_spanned(
                &expression,
                "Invalid - unparseable attribute.",
            )),
        }
    }

    /// Fold `other` into these attributes, as when a field carries the attribute more than once.
    pub(crate) fn extend(&mut self, other: IntermediateAttributes) {
        self.singletons.extend(other.singletons);

        for (key, values) in other.pairs {
            self.pairs.entry(key).or_default().extend(values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use std::collections::{HashMap, HashSet};
    use syn::parse_quote;

    #[test]
    fn construct_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes, IntermediateAttributes::default());
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg(abc, name = "rec")]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["abc".to_string()]),
                pairs: HashMap::from([(
                    "name".to_string(),
                    vec![DeriveValue {
                        tokens: Literal::string("rec").into_token_stream(),
                    }]
                )])
            }
        );
    }

    #[test]
    fn construct_attributes_multiple() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg(default = 1, default = 2)]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes.pairs.get("default").unwrap().len(), 2);
    }

    #[test]
    fn construct_attributes_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg(default = 8 * 1024)]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes.pairs.get("default").unwrap(),
            &vec![DeriveValue {
                tokens: quote::quote! { 8 * 1024 },
            }]
        );
    }

    #[test]
    fn extend() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg(abc, default = 1)]
        };
        let other_attribute: syn::Attribute = parse_quote! {
            #[getarg(name = "rec", default = 2)]
        };
        let mut attributes = IntermediateAttributes::try_from(&attribute).unwrap();
        let other = IntermediateAttributes::try_from(&other_attribute).unwrap();

        // Execute
        attributes.extend(other);

        // Verify
        assert!(attributes.singletons.contains("abc"));
        assert_eq!(attributes.pairs.get("name").unwrap().len(), 1);
        assert_eq!(attributes.pairs.get("default").unwrap().len(), 2);
    }

    #[test]
    fn construct_attributes_invalid() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg]
        };

        // Execute & verify
        assert!(IntermediateAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn construct_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[getarg("rec")]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute.");
    }
}
