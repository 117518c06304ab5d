//! # readmark
//!
//! Reading-progress marks for Rust source.
//!
//! While working through an unfamiliar codebase, a reviewer marks each
//! declaration with how far they have got (`UN_READ`, `READING`,
//! `HAVE_READ`, or `NOTICE` for things that need special attention) and
//! notes on what they learned:
//!
//! ```
//! use readmark::read;
//!
//! #[read(s = READING, postil = [
//!     "rows are built through the constructor marked for auto-mapping",
//!     "marking two constructors makes the choice ambiguous",
//! ])]
//! struct AutoConstructorTest {
//!     #[read(s = HAVE_READ, postil = ["created once, shared by every test"])]
//!     factory: u32,
//! }
//!
//! impl AutoConstructorTest {
//!     #[read(s = HAVE_READ, postil = ["every column of row 1 has a value"])]
//!     fn fully_populated_subject(&self) -> u32 {
//!         self.factory
//!     }
//! }
//!
//! # fn main() {
//! let test = AutoConstructorTest { factory: 1 };
//! assert_eq!(test.fully_populated_subject(), 1);
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Attribute** ([`read`]): checks the mark at compile time and erases it.
//!   Marked code compiles to exactly what it would without the mark.
//! - **Scanner** ([`Scanner`]): parses source with `syn` and collects marks.
//! - **Registry** ([`Registry`]): marks keyed by [`DeclId`], queryable by
//!   status, with a [`Progress`] summary.
//! - **Report** ([`Report`]): text or JSON output, used by the `readmark`
//!   binary.
//!
//! ## Targets
//!
//! Types, functions and methods, and fields of a marked struct or union.
//! Anything else is rejected:
//!
//! ```compile_fail
//! use readmark::read;
//!
//! #[read(s = HAVE_READ)]
//! mod not_a_type {}
//! ```
//!
//! ```compile_fail
//! use readmark::read;
//!
//! #[read]
//! const LIMIT: u8 = 3;
//! ```
//!
//! ```compile_fail
//! use readmark::read;
//!
//! // a field mark needs a mark on its type
//! struct Subject {
//!     #[read]
//!     id: i32,
//! }
//! ```
//!
//! Only the four status tokens are accepted:
//!
//! ```compile_fail
//! use readmark::read;
//!
//! #[read(s = FINISHED)]
//! struct Subject;
//! ```
//!
//! A declaration carries at most one mark:
//!
//! ```compile_fail
//! use readmark::read;
//!
//! #[read(s = READING)]
//! #[read(s = HAVE_READ)]
//! fn set_up() {}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod decl;
pub mod diagnostic;
pub mod error;
pub mod registry;
pub mod report;
pub mod scanner;

// Re-export main types
pub use config::ScanConfig;
pub use decl::{DeclId, ModulePath, SourceLocation};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{ConfigError, ReadmarkError, RegistryError, Result, ScanError};
pub use readmark_macros::read;
pub use readmark_syntax::{ReadingMark, Status, StatusParseError, Target};
pub use registry::{Entry, Progress, Registry};
pub use report::{Report, ReportFormat};
pub use scanner::{ScanOutcome, Scanner};

/// readmark version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
