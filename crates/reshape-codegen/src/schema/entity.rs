use super::{EntityAttr, ErrorSet, Field, FieldKind};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Entity name reported by `entity_name()`
    pub(crate) name: String,

    /// Entity fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Entity> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let attr = EntityAttr::from_attrs(&ast.attrs)?;
        let mut errs = ErrorSet::new();

        if let Some(rename) = &attr.rename {
            errs.push(syn::Error::new_spanned(
                rename,
                "`rename` is only allowed on fields; use `name` on the struct",
            ));
        }

        if attr.nested.is_some() || attr.flatten.is_some() || attr.skip.is_some() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "`nested`, `flatten` and `skip` are only allowed on fields",
            ));
        }

        let mut fields: Vec<Field> = vec![];

        for node in node.named.iter() {
            let Some(field) = errs.check(Field::from_ast(node)) else {
                continue;
            };

            let clash = fields.iter().any(|other| {
                other.name == field.name
                    && !matches!(other.kind, FieldKind::Flatten | FieldKind::Skip)
                    && !matches!(field.kind, FieldKind::Flatten | FieldKind::Skip)
            });

            if clash {
                errs.push(syn::Error::new_spanned(
                    node,
                    format!("more than one field is named `{}`", field.name),
                ));
            }

            fields.push(field);
        }

        let name = match &attr.name {
            Some(name) => name.value(),
            None => ast.ident.to_string(),
        };

        errs.finish(Entity {
            ident: ast.ident.clone(),
            name,
            fields,
        })
    }

    /// Fields the engine reads and writes directly.
    pub(crate) fn own_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| matches!(field.kind, FieldKind::Scalar | FieldKind::Nested))
    }

    pub(crate) fn flattened_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| field.kind == FieldKind::Flatten)
    }
}
