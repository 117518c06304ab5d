//! # readmark-syntax
//!
//! The data model and argument grammar behind the `#[read]` reading mark.
//!
//! A reading mark records how far a reviewer has got with a declaration
//! (a [`Status`]) and why (free-text notes, the "postil"). This crate is
//! shared by the attribute macro, which validates marks at compile time and
//! erases them, and by the scanner in `readmark`, which collects them from
//! source into a queryable registry.
//!
//! ## Surface
//!
//! ```text
//! #[read(s = <UN_READ | READING | HAVE_READ | NOTICE>, postil = ["note", ...])]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grammar;
pub mod mark;
pub mod status;
pub mod target;

pub use grammar::{is_mark, parse_mark, MarkArgs, MARK_ATTRIBUTE};
pub use mark::ReadingMark;
pub use status::{Status, StatusParseError};
pub use target::{item_attrs, item_kind_name, Target};
