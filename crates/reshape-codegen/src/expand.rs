mod entity;
mod polymorphic;

use crate::schema::{Entity, Polymorphic};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn entity(entity: &Entity) -> TokenStream {
    let reshape = quote!(_reshape::codegen_support);
    wrap_in_const(entity::expand(entity, &reshape))
}

pub(super) fn polymorphic(polymorphic: &Polymorphic) -> TokenStream {
    let reshape = quote!(_reshape::codegen_support);
    wrap_in_const(polymorphic::expand(polymorphic, &reshape))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use reshape as _reshape;
            #code
        };
    }
}
