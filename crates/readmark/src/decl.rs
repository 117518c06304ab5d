//! Declaration identifiers and source locations
//!
//! A declaration is identified by its crate-relative path plus, for members,
//! the member name:
//!
//! ```text
//! my_crate::mapper::Subject                     type
//! my_crate::mapper::load                        free function
//! my_crate::mapper::Subject::new                inherent method
//! my_crate::mapper::<Subject as Mapper>::get    trait impl method
//! my_crate::mapper::Mapper::get                 trait method
//! my_crate::mapper::Subject.name                field
//! my_crate::mapper::Pair.0                      tuple field
//! ```

use proc_macro2::Span;
use quote::ToTokens;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Source code location of a mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Location of the start of `span` within `file`.
    pub fn from_span(file: &str, span: Span) -> Self {
        let start = span.start();
        Self::new(file, start.line, start.column + 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Identifier of a marked declaration; the registry key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(String);

impl DeclId {
    /// Wrap an already formatted identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A type or free function declared directly in `module`.
    pub fn item(module: &ModulePath, name: &str) -> Self {
        Self(format!("{}::{}", module, name))
    }

    /// An associated item of an inherent impl, or of a trait definition.
    pub fn member(module: &ModulePath, owner: &str, name: &str) -> Self {
        Self(format!("{}::{}::{}", module, owner, name))
    }

    /// An associated item of a trait impl.
    pub fn trait_member(module: &ModulePath, self_ty: &str, trait_path: &str, name: &str) -> Self {
        Self(format!("{}::<{} as {}>::{}", module, self_ty, trait_path, name))
    }

    /// A field of a struct or union. Tuple fields use their index.
    pub fn field(module: &ModulePath, owner: &str, field: &str) -> Self {
        Self(format!("{}::{}.{}", module, owner, field))
    }

    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeclId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeclId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A module path such as `my_crate::mapper::tests`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// The root module of a crate.
    pub fn root(crate_name: impl Into<String>) -> Self {
        Self {
            segments: vec![crate_name.into()],
        }
    }

    /// Parse `a::b::c`.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split("::").map(str::to_string).collect(),
        }
    }

    /// A child module.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Enter a child module in place.
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Leave the innermost module. The crate root is never removed.
    pub fn pop(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    /// Module path of a source file, given its crate name and its path
    /// relative to the package root.
    ///
    /// Files under `src/` follow the module tree (`lib.rs` is the root,
    /// `a/mod.rs` and `a.rs` are module `a`). Every binary target gets its
    /// own root below the crate name: `src/main.rs` is `krate::main`,
    /// `src/bin/tool.rs` and `src/bin/tool/main.rs` are `krate::bin::tool`.
    /// Files elsewhere in the package (`tests/`, `benches/`) keep their
    /// directories as segments so that separate test crates do not collide.
    pub fn for_relative_file(crate_name: &str, relative: &Path) -> Self {
        let mut parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let in_src = parts.first().is_some_and(|p| p == "src");
        if in_src {
            parts.remove(0);
        }

        let mut path = Self::root(crate_name);
        let Some(file) = parts.pop() else {
            return path;
        };
        let stem = file.strip_suffix(".rs").unwrap_or(&file).to_string();

        if in_src {
            match (parts.as_slice(), stem.as_str()) {
                ([], "lib") => return path,
                ([], "main") => {
                    path.push("main");
                    return path;
                }
                ([dir, name], "main") if dir == "bin" => {
                    path.push("bin");
                    path.push(name.as_str());
                    return path;
                }
                _ => {}
            }
        }

        for dir in parts {
            path.push(dir);
        }
        if stem != "mod" {
            path.push(stem);
        }
        path
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

/// Render a type or path compactly: `Wrapper<u8>`, `&'a mut T`,
/// `(u8, u16)`.
pub fn render_tokens(node: &impl ToTokens) -> String {
    let raw = node.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());

    for piece in raw.split_whitespace() {
        let glue_left = piece.starts_with('>')
            || matches!(piece, "<" | "::" | "," | ";" | ")" | "]" | "(")
            || out.is_empty();
        let glue_right = out.ends_with('<')
            || out.ends_with("::")
            || out.ends_with('&')
            || out.ends_with('*')
            || out.ends_with('(')
            || out.ends_with('[');

        if !glue_left && !glue_right {
            out.push(' ');
        }
        out.push_str(piece);
    }

    out
}
