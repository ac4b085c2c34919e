use super::{EntityAttr, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Name the engine uses for this field
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    pub(crate) kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Read and written as a plain value
    Scalar,

    /// Holds embedded entities
    Nested,

    /// An embedded entity whose fields are exposed as the outer entity's own
    Flatten,

    /// Invisible to the engine
    Skip,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let attr = EntityAttr::from_attrs(&field.attrs)?;
        let mut errs = ErrorSet::new();

        if let Some(name) = &attr.name {
            errs.push(syn::Error::new_spanned(
                name,
                "`name` is only allowed on the struct; use `rename` on fields",
            ));
        }

        let kind = match (&attr.nested, &attr.flatten, &attr.skip) {
            (None, None, None) => FieldKind::Scalar,
            (Some(_), None, None) => FieldKind::Nested,
            (None, Some(_), None) => FieldKind::Flatten,
            (None, None, Some(_)) => FieldKind::Skip,
            _ => {
                errs.push(syn::Error::new_spanned(
                    field,
                    "`nested`, `flatten` and `skip` are mutually exclusive",
                ));
                FieldKind::Scalar
            }
        };

        if let Some(rename) = &attr.rename {
            if matches!(kind, FieldKind::Flatten | FieldKind::Skip) {
                errs.push(syn::Error::new_spanned(
                    rename,
                    "`rename` has no effect on flattened or skipped fields",
                ));
            }
        }

        let name = match &attr.rename {
            Some(rename) => rename.value(),
            None => ident.to_string(),
        };

        errs.finish(Field {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            kind,
        })
    }
}
