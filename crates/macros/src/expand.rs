//! Expansion of `#[read]`

use proc_macro2::TokenStream;
use quote::ToTokens;
use readmark_syntax::{
    is_mark, item_attrs, item_kind_name, parse_mark, MarkArgs, Target, MARK_ATTRIBUTE,
};

/// Validate the mark and return the item unchanged, minus field marks.
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    syn::parse2::<MarkArgs>(attr)?;

    match syn::parse2::<syn::Item>(item.clone()) {
        Ok(syn::Item::Verbatim(_)) => expand_assoc_item(item),
        Ok(item) => expand_item(item),
        Err(err) => expand_assoc_item(item).map_err(|_| err),
    }
}

fn expand_item(mut item: syn::Item) -> syn::Result<TokenStream> {
    if Target::of_item(&item).is_none() {
        return Err(syn::Error::new_spanned(
            &item,
            format!(
                "cannot mark {}: #[read] applies to types, methods, and fields",
                item_kind_name(&item)
            ),
        ));
    }
    reject_second_mark(item_attrs(&item))?;

    match &mut item {
        syn::Item::Struct(item_struct) => strip_field_marks(item_struct.fields.iter_mut())?,
        syn::Item::Union(item_union) => strip_field_marks(item_union.fields.named.iter_mut())?,
        syn::Item::Enum(item_enum) => reject_variant_marks(item_enum)?,
        _ => {}
    }

    Ok(item.into_token_stream())
}

/// Associated items the item grammar does not cover: trait methods without
/// a body, associated types without a value, and impl methods with
/// modifiers.
fn expand_assoc_item(item: TokenStream) -> syn::Result<TokenStream> {
    if let Ok(trait_fn) = syn::parse2::<syn::TraitItemFn>(item.clone()) {
        reject_second_mark(&trait_fn.attrs)?;
        return Ok(trait_fn.into_token_stream());
    }
    if let Ok(assoc_type) = syn::parse2::<syn::TraitItemType>(item.clone()) {
        reject_second_mark(&assoc_type.attrs)?;
        return Ok(assoc_type.into_token_stream());
    }
    if let Ok(impl_fn) = syn::parse2::<syn::ImplItemFn>(item.clone()) {
        reject_second_mark(&impl_fn.attrs)?;
        return Ok(impl_fn.into_token_stream());
    }

    Err(syn::Error::new_spanned(
        item,
        "cannot mark this item: #[read] applies to types, methods, and fields",
    ))
}

/// A declaration carries at most one mark.
fn reject_second_mark(attrs: &[syn::Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| is_mark(attr, MARK_ATTRIBUTE)) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "duplicate #[read] mark, a declaration carries at most one",
        )),
        None => Ok(()),
    }
}

fn strip_field_marks<'a>(fields: impl Iterator<Item = &'a mut syn::Field>) -> syn::Result<()> {
    for field in fields {
        let (marks, rest): (Vec<_>, Vec<_>) = field
            .attrs
            .drain(..)
            .partition(|attr| is_mark(attr, MARK_ATTRIBUTE));

        if let Some(second) = marks.get(1) {
            return Err(syn::Error::new_spanned(
                second,
                "duplicate #[read] mark, a field carries at most one",
            ));
        }
        for mark in &marks {
            parse_mark(mark)?;
        }
        field.attrs = rest;
    }
    Ok(())
}

fn reject_variant_marks(item_enum: &syn::ItemEnum) -> syn::Result<()> {
    for variant in &item_enum.variants {
        let field_attrs = variant.fields.iter().flat_map(|field| field.attrs.iter());
        if let Some(attr) = variant
            .attrs
            .iter()
            .chain(field_attrs)
            .find(|attr| is_mark(attr, MARK_ATTRIBUTE))
        {
            return Err(syn::Error::new_spanned(
                attr,
                "#[read] may not be applied to enum variants or their fields",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quote::quote;

    fn same_tokens(a: &TokenStream, b: &TokenStream) -> bool {
        a.to_string() == b.to_string()
    }

    #[test]
    fn test_struct_is_emitted_unchanged() {
        let item = quote! {
            #[derive(Debug)]
            pub struct Subject {
                id: i32,
                name: String,
            }
        };
        let out = expand(quote!(s = READING), item.clone()).unwrap();
        assert!(same_tokens(&out, &item));
    }

    #[test]
    fn test_function_is_emitted_unchanged() {
        let item = quote! {
            fn fully_populated_subject() {
                let subject = 1;
                assert_eq!(subject, 1);
            }
        };
        let args = quote!(s = HAVE_READ, postil = ["all columns set"]);
        let out = expand(args, item.clone()).unwrap();
        assert!(same_tokens(&out, &item));
    }

    #[test]
    fn test_method_with_receiver() {
        let item = quote! {
            pub fn verify(&self, subjects: &[u8]) -> usize {
                subjects.len()
            }
        };
        let out = expand(quote!(), item.clone()).unwrap();
        assert!(same_tokens(&out, &item));
    }

    #[test]
    fn test_trait_method_without_body() {
        let item = quote! {
            fn get_subject(&self, id: i32) -> Option<String>;
        };
        let out = expand(quote!(s = NOTICE), item.clone()).unwrap();
        assert!(same_tokens(&out, &item));
    }

    #[test]
    fn test_associated_type_without_value() {
        for item in [quote!(type Row;), quote!(type Row: Clone;)] {
            let out = expand(quote!(s = READING), item.clone()).unwrap();
            assert!(same_tokens(&out, &item));
        }
    }

    #[test]
    fn test_duplicate_associated_type_mark_is_rejected() {
        let item = quote! {
            #[read]
            type Row;
        };
        let err = expand(quote!(), item).unwrap_err();
        assert!(err.to_string().contains("duplicate #[read] mark"));
    }

    #[test]
    fn test_bodiless_static_is_rejected() {
        assert!(expand(quote!(), quote!(static COUNT: u32;)).is_err());
    }

    #[test]
    fn test_field_marks_are_stripped() {
        let item = quote! {
            struct AutoConstructorTest {
                #[read(s = HAVE_READ, postil = ["shared by every test"])]
                factory: u32,
                #[allow(dead_code)]
                other: u8,
            }
        };
        let expected = quote! {
            struct AutoConstructorTest {
                factory: u32,
                #[allow(dead_code)]
                other: u8,
            }
        };
        let out = expand(quote!(s = READING), item).unwrap();
        assert_eq!(out.to_string(), expected.to_string());
    }

    #[test]
    fn test_tuple_struct_field_marks_are_stripped() {
        let item = quote! {
            struct Pair(#[read] u8, u16);
        };
        let out = expand(quote!(), item).unwrap();
        assert_eq!(out.to_string(), quote!(struct Pair(u8, u16);).to_string());
    }

    #[test]
    fn test_union_field_marks_are_stripped() {
        let item = quote! {
            union Bits {
                #[read(s = NOTICE)]
                raw: u32,
                float: f32,
            }
        };
        let out = expand(quote!(), item).unwrap();
        assert!(!out.to_string().contains("read"));
    }

    #[test]
    fn test_invalid_field_mark_is_rejected() {
        let item = quote! {
            struct A {
                #[read(s = FINISHED)]
                x: u8,
            }
        };
        let err = expand(quote!(), item).unwrap_err();
        assert!(err.to_string().contains("unknown reading status"));
    }

    #[test]
    fn test_duplicate_field_mark_is_rejected() {
        let item = quote! {
            struct A {
                #[read]
                #[read(s = READING)]
                x: u8,
            }
        };
        let err = expand(quote!(), item).unwrap_err();
        assert!(err.to_string().contains("duplicate #[read] mark"));
    }

    #[test]
    fn test_duplicate_item_mark_is_rejected() {
        let item = quote! {
            #[read(s = HAVE_READ)]
            fn twice() {}
        };
        let err = expand(quote!(s = READING), item).unwrap_err();
        assert!(err.to_string().contains("duplicate #[read] mark"));
    }

    #[test]
    fn test_invalid_args_are_rejected() {
        let err = expand(quote!(s = DONE), quote!(struct A;)).unwrap_err();
        assert!(err.to_string().contains("unknown reading status"));

        let err = expand(quote!(notes = ["a"]), quote!(struct A;)).unwrap_err();
        assert!(err.to_string().contains("unknown #[read] argument"));
    }

    #[test]
    fn test_non_permitted_targets_are_rejected() {
        let cases = [
            (quote!(mod m {}), "module"),
            (quote!(const X: u8 = 1;), "constant"),
            (quote!(static Y: u8 = 1;), "static"),
            (quote!(use std::fmt;), "use declaration"),
            (quote!(impl A {}), "impl block"),
        ];
        for (item, kind) in cases {
            let err = expand(quote!(), item).unwrap_err();
            assert!(err.to_string().contains(kind), "{}", err);
        }
    }

    #[test]
    fn test_enum_variant_marks_are_rejected() {
        let item = quote! {
            enum Outcome {
                #[read]
                Mapped,
                Failed,
            }
        };
        let err = expand(quote!(), item).unwrap_err();
        assert!(err.to_string().contains("enum variants"));
    }

    #[test]
    fn test_enum_without_variant_marks() {
        let item = quote! {
            enum Outcome {
                Mapped,
                Failed(String),
            }
        };
        let out = expand(quote!(s = UN_READ), item.clone()).unwrap();
        assert!(same_tokens(&out, &item));
    }
}
