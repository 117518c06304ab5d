//! # readmark-macros
//!
//! The `#[read]` attribute records a reviewer's reading status and notes on a
//! declaration without changing it. The attribute checks its arguments at
//! compile time and then expands to the annotated item exactly as written,
//! so a mark leaves nothing behind in the compiled crate.
//!
//! ```ignore
//! use readmark::read;
//!
//! #[read(s = READING, postil = [
//!     "the annotated constructor is used to build each row",
//!     "marking two constructors is ambiguous and fails the mapping",
//! ])]
//! struct AutoConstructorTest {
//!     #[read(s = HAVE_READ)]
//!     factory: SessionFactory,
//! }
//!
//! impl AutoConstructorTest {
//!     #[read(s = HAVE_READ, postil = ["every column is populated"])]
//!     fn fully_populated_subject(&self) {}
//! }
//! ```
//!
//! Permitted targets are types (struct, enum, union, trait, type alias),
//! functions and methods, and struct or union fields. Field marks are
//! collected by the mark on the enclosing type, since Rust does not run
//! attribute macros on fields.

use proc_macro::TokenStream;

mod expand;

/// Mark a declaration with a reading status and notes.
///
/// Arguments:
///
/// - `s = UN_READ | READING | HAVE_READ | NOTICE` (default `UN_READ`)
/// - `postil = ["note", ...]` or `postil = "note"` (default none)
///
/// The item is emitted unchanged. Field marks inside a marked struct or
/// union are validated and removed.
#[proc_macro_attribute]
pub fn read(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand::expand(attr.into(), item.into()) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
