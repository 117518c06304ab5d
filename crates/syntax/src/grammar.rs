//! Argument grammar for `#[read(...)]`
//!
//! ```text
//! #[read]
//! #[read(s = HAVE_READ)]
//! #[read(s = Status::NOTICE, postil = ["first note", "second note"])]
//! #[read(postil = "a single note")]
//! ```
//!
//! Both keys are optional and may appear in any order, each at most once.
//! A missing `s` means `UN_READ`; a missing `postil` means no notes.

use syn::meta::ParseNestedMeta;
use syn::parse::{Parse, ParseStream, Parser};
use syn::punctuated::Punctuated;
use syn::{Attribute, LitStr, Meta, Token};

use crate::{ReadingMark, Status};

/// Default attribute name recognised as a reading mark.
pub const MARK_ATTRIBUTE: &str = "read";

/// Parsed arguments of one `#[read(...)]` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkArgs {
    /// Explicit status, if given
    pub status: Option<Status>,

    /// Notes, if given
    pub notes: Option<Vec<String>>,
}

impl MarkArgs {
    /// Resolve defaults and produce the mark.
    pub fn into_mark(self) -> ReadingMark {
        ReadingMark::new(self.status.unwrap_or_default()).with_notes(self.notes.unwrap_or_default())
    }

    fn parse_entry(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("s") {
            if self.status.is_some() {
                return Err(meta.error("duplicate `s` argument"));
            }
            let path: syn::Path = meta.value()?.parse()?;
            self.status = Some(status_from_path(&path)?);
            Ok(())
        } else if meta.path.is_ident("postil") {
            if self.notes.is_some() {
                return Err(meta.error("duplicate `postil` argument"));
            }
            self.notes = Some(parse_notes(meta.value()?)?);
            Ok(())
        } else {
            Err(meta.error("unknown #[read] argument, expected `s` or `postil`"))
        }
    }
}

impl Parse for MarkArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let tokens: proc_macro2::TokenStream = input.parse()?;
        let mut args = MarkArgs::default();
        syn::meta::parser(|meta| args.parse_entry(meta)).parse2(tokens)?;
        Ok(args)
    }
}

/// Resolve a status path such as `HAVE_READ` or `Status::HAVE_READ`.
fn status_from_path(path: &syn::Path) -> syn::Result<Status> {
    let segments: Vec<_> = path.segments.iter().collect();
    let qualified_ok = match segments.len() {
        1 => true,
        n => segments[n - 2].ident == "Status",
    };

    let last = segments
        .last()
        .ok_or_else(|| syn::Error::new_spanned(path, "missing reading status"))?;

    match Status::from_token(&last.ident.to_string()) {
        Some(status) if qualified_ok && matches!(last.arguments, syn::PathArguments::None) => {
            Ok(status)
        }
        _ => Err(syn::Error::new_spanned(
            path,
            "unknown reading status, expected one of UN_READ, READING, HAVE_READ, NOTICE",
        )),
    }
}

/// Parse either a single string literal or a bracketed list of them.
fn parse_notes(input: ParseStream) -> syn::Result<Vec<String>> {
    if input.peek(LitStr) {
        let note: LitStr = input.parse()?;
        return Ok(vec![note.value()]);
    }

    let content;
    syn::bracketed!(content in input);
    let notes = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(notes.iter().map(LitStr::value).collect())
}

/// Whether `attr` is a reading mark named `name`.
///
/// Matches on the last path segment, so both `#[read]` and
/// `#[readmark::read]` are recognised.
pub fn is_mark(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == name)
}

/// Parse a reading mark from an attribute found in source.
pub fn parse_mark(attr: &Attribute) -> syn::Result<ReadingMark> {
    match &attr.meta {
        Meta::Path(_) => Ok(ReadingMark::default()),
        Meta::List(list) => Ok(list.parse_args::<MarkArgs>()?.into_mark()),
        Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected #[read] or #[read(s = ..., postil = [...])]",
        )),
    }
}
