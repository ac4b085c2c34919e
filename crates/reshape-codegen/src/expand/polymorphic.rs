use crate::schema::Polymorphic;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(polymorphic: &Polymorphic, reshape: &TokenStream) -> TokenStream {
    let ident = &polymorphic.ident;
    let enum_name = ident.to_string();

    let to_field_arms = polymorphic.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        quote!(#ident::#variant_ident(entity) => #reshape::Field::Entity(entity),)
    });

    // Each attempt hands the box back on a mismatch for the next one.
    let downcasts = polymorphic.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let ty = &variant.ty;
        quote! {
            let entity = match entity.downcast::<#ty>() {
                ::std::result::Result::Ok(entity) => {
                    return ::std::result::Result::Ok(#ident::#variant_ident(*entity));
                }
                ::std::result::Result::Err(entity) => entity,
            };
        }
    });

    let from_impls = polymorphic.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let ty = &variant.ty;
        quote! {
            impl ::std::convert::From<#ty> for #ident {
                fn from(entity: #ty) -> Self {
                    #ident::#variant_ident(entity)
                }
            }
        }
    });

    quote! {
        impl #reshape::NestedField for #ident {
            fn to_field(&self) -> #reshape::Field<'_> {
                match self {
                    #( #to_field_arms )*
                }
            }

            fn from_field(value: #reshape::FieldValue) -> #reshape::Result<Self> {
                let entity = match value {
                    #reshape::FieldValue::Entity(entity) => entity,
                    #reshape::FieldValue::Value(value) => {
                        return ::std::result::Result::Err(
                            #reshape::Error::type_conversion(value, #enum_name)
                        );
                    }
                    #reshape::FieldValue::List(_) => {
                        return ::std::result::Result::Err(#reshape::Error::from_args(
                            ::std::format_args!("expected one `{}`, found a list", #enum_name)
                        ));
                    }
                };

                #( #downcasts )*

                ::std::result::Result::Err(#reshape::Error::from_args(::std::format_args!(
                    "entity `{}` is not a variant of `{}`",
                    #reshape::Entity::entity_name(&*entity),
                    #enum_name
                )))
            }
        }

        #( #from_impls )*
    }
}
