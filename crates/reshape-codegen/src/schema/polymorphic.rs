use super::ErrorSet;

use quote::ToTokens;

/// An enum whose variants each wrap one entity type.
#[derive(Debug)]
pub(crate) struct Polymorphic {
    pub(crate) ident: syn::Ident,

    pub(crate) variants: Vec<Variant>,
}

#[derive(Debug)]
pub(crate) struct Variant {
    pub(crate) ident: syn::Ident,

    /// The wrapped entity type
    pub(crate) ty: syn::Type,
}

impl Polymorphic {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Polymorphic> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "polymorphic enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "polymorphic enum must have at least one variant",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut variants: Vec<Variant> = vec![];

        for node in &ast.variants {
            let Some(variant) = errs.check(Variant::from_ast(node)) else {
                continue;
            };

            let ty = variant.ty.to_token_stream().to_string();
            if variants
                .iter()
                .any(|other| other.ty.to_token_stream().to_string() == ty)
            {
                errs.push(syn::Error::new_spanned(
                    &node.fields,
                    "entity type is already wrapped by another variant",
                ));
            }

            variants.push(variant);
        }

        errs.finish(Polymorphic {
            ident: ast.ident.clone(),
            variants,
        })
    }
}

impl Variant {
    fn from_ast(node: &syn::Variant) -> syn::Result<Variant> {
        let syn::Fields::Unnamed(fields) = &node.fields else {
            return Err(syn::Error::new_spanned(
                node,
                "polymorphic variants must wrap exactly one entity, e.g. `Color(Color)`",
            ));
        };

        if fields.unnamed.len() != 1 {
            return Err(syn::Error::new_spanned(
                fields,
                "polymorphic variants must wrap exactly one entity",
            ));
        }

        Ok(Variant {
            ident: node.ident.clone(),
            ty: fields.unnamed[0].ty.clone(),
        })
    }
}
