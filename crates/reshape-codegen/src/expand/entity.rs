use crate::schema::{Entity, FieldKind};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(entity: &Entity, reshape: &TokenStream) -> TokenStream {
    let ident = &entity.ident;
    let entity_name = &entity.name;

    let field_names = expand_field_names(entity, reshape);
    let field = expand_field(entity, reshape);
    let set_field = expand_set_field(entity, reshape);

    quote! {
        impl #reshape::Entity for #ident {
            fn entity_name(&self) -> &'static str {
                #entity_name
            }

            fn field_names(&self) -> #reshape::Vec<&'static str> {
                #field_names
            }

            fn field(&self, name: &str) -> #reshape::Option<#reshape::Field<'_>> {
                #field
            }

            fn set_field(&mut self, name: &str, value: #reshape::FieldValue) -> #reshape::Result<()> {
                #set_field
            }

            fn as_any(&self) -> &dyn #reshape::Any {
                self
            }

            fn into_any(self: #reshape::Box<Self>) -> #reshape::Box<dyn #reshape::Any> {
                self
            }
        }

        impl #reshape::NestedField for #ident {
            fn to_field(&self) -> #reshape::Field<'_> {
                #reshape::Field::Entity(self)
            }

            fn from_field(value: #reshape::FieldValue) -> #reshape::Result<Self> {
                value.into_entity::<Self>()
            }
        }
    }
}

fn expand_field_names(entity: &Entity, reshape: &TokenStream) -> TokenStream {
    let own = entity.own_fields().map(|field| &field.name);
    let flattened = entity.flattened_fields().map(|field| {
        let ident = &field.ident;
        quote!(names.extend(#reshape::Entity::field_names(&self.#ident));)
    });

    quote! {
        let mut names: #reshape::Vec<&'static str> = ::std::vec![#( #own ),*];
        #( #flattened )*
        names
    }
}

fn expand_field(entity: &Entity, reshape: &TokenStream) -> TokenStream {
    let arms = entity.own_fields().map(|field| {
        let ident = &field.ident;
        let name = &field.name;

        let read = match field.kind {
            FieldKind::Nested => quote!(#reshape::NestedField::to_field(&self.#ident)),
            _ => quote!(#reshape::Field::Value(#reshape::ScalarField::to_value(&self.#ident))),
        };

        quote!(#name => #reshape::Option::Some(#read),)
    });

    let flattened = entity.flattened_fields().map(|field| {
        let ident = &field.ident;
        quote! {
            if let #reshape::Option::Some(field) = #reshape::Entity::field(&self.#ident, name) {
                return #reshape::Option::Some(field);
            }
        }
    });

    quote! {
        match name {
            #( #arms )*
            _ => {
                #( #flattened )*
                #reshape::Option::None
            }
        }
    }
}

fn expand_set_field(entity: &Entity, reshape: &TokenStream) -> TokenStream {
    let entity_name = &entity.name;

    let arms = entity.own_fields().map(|field| {
        let ident = &field.ident;
        let name = &field.name;

        let assign = match field.kind {
            FieldKind::Nested => quote!(#reshape::assign_nested(value, name, #entity_name)?),
            _ => quote!(#reshape::assign_scalar(value, name, #entity_name)?),
        };

        quote!(#name => self.#ident = #assign,)
    });

    let flattened = entity.flattened_fields().map(|field| {
        let ident = &field.ident;
        quote! {
            if #reshape::Entity::field_names(&self.#ident).iter().any(|field| *field == name) {
                return #reshape::Entity::set_field(&mut self.#ident, name, value);
            }
        }
    });

    quote! {
        match name {
            #( #arms )*
            _ => {
                #( #flattened )*
                return ::std::result::Result::Err(
                    #reshape::Error::could_not_assign_property_value(name, #entity_name)
                );
            }
        }

        ::std::result::Result::Ok(())
    }
}
