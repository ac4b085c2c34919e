/// Options attached to a struct or one of its fields via `#[entity(...)]`.
///
/// Allowed syntax:
///
/// ```text
/// #[entity(name = "Author")]          // on the struct
/// #[entity(nested)]                   // on a field
/// #[entity(rename = "_name")]
/// #[entity(nested, rename = "_tags")]
/// #[entity(flatten)]
/// #[entity(skip)]
/// ```
#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) rename: Option<syn::LitStr>,
    pub(crate) nested: Option<kw::nested>,
    pub(crate) flatten: Option<kw::flatten>,
    pub(crate) skip: Option<kw::skip>,
}

impl EntityAttr {
    /// Merges every `#[entity(...)]` attribute in `attrs`.
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<EntityAttr> {
        let mut result = EntityAttr::default();

        for attr in attrs {
            if attr.path().is_ident("entity") {
                attr.parse_args_with(|input: syn::parse::ParseStream| result.parse_into(input))?;
            }
        }

        Ok(result)
    }

    fn parse_into(&mut self, input: syn::parse::ParseStream) -> syn::Result<()> {
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::name) {
                let _name: kw::name = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                set_once(&mut self.name, input.parse()?, "name")?;
            } else if lookahead.peek(kw::rename) {
                let _rename: kw::rename = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                set_once(&mut self.rename, input.parse()?, "rename")?;
            } else if lookahead.peek(kw::nested) {
                set_once(&mut self.nested, input.parse()?, "nested")?;
            } else if lookahead.peek(kw::flatten) {
                set_once(&mut self.flatten, input.parse()?, "flatten")?;
            } else if lookahead.peek(kw::skip) {
                set_once(&mut self.skip, input.parse()?, "skip")?;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(())
    }
}

fn set_once<T: syn::spanned::Spanned>(slot: &mut Option<T>, value: T, what: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(value.span(), format!("duplicate `{what}`")));
    }
    *slot = Some(value);
    Ok(())
}

pub(crate) mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(rename);
    syn::custom_keyword!(nested);
    syn::custom_keyword!(flatten);
    syn::custom_keyword!(skip);
}
