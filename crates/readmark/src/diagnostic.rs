//! Non-fatal findings reported by a scan

use serde::Serialize;
use std::fmt;

use crate::decl::{DeclId, SourceLocation};

/// Something the scanner noticed but did not record as a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Where it was found
    pub location: SourceLocation,

    /// What was found
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(location: SourceLocation, kind: DiagnosticKind) -> Self {
        Self { location, kind }
    }
}

/// Kinds of scan diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A mark on something that is not a type, method, or field
    UnsupportedTarget {
        /// Kind of declaration, e.g. "module"
        target: String,
    },

    /// A mark whose arguments do not parse; it is not recorded
    MalformedMark {
        /// The declaration carrying it
        id: DeclId,
        /// Parser message
        message: String,
    },

    /// A field mark inside a type that carries no mark itself.
    /// Recorded, but the source will not compile.
    FieldOutsideMarkedType {
        /// The field
        id: DeclId,
    },

    /// A file that is not valid Rust, skipped
    SkippedFile {
        /// Parser message
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.location)?;
        match &self.kind {
            DiagnosticKind::UnsupportedTarget { target } => {
                write!(f, "mark on a {} is ignored", target)
            }
            DiagnosticKind::MalformedMark { id, message } => {
                write!(f, "malformed mark on `{}`: {}", id, message)
            }
            DiagnosticKind::FieldOutsideMarkedType { id } => {
                write!(f, "field `{}` is marked but its type is not", id)
            }
            DiagnosticKind::SkippedFile { message } => {
                write!(f, "file skipped: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(
            SourceLocation::new("src/lib.rs", 4, 1),
            DiagnosticKind::UnsupportedTarget {
                target: "module".to_string(),
            },
        );
        assert_eq!(diag.to_string(), "src/lib.rs:4:1: mark on a module is ignored");
    }

    #[test]
    fn test_serialize_flattens_kind() {
        let diag = Diagnostic::new(
            SourceLocation::new("src/lib.rs", 2, 5),
            DiagnosticKind::FieldOutsideMarkedType {
                id: DeclId::new("demo::A.x"),
            },
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "field_outside_marked_type");
        assert_eq!(json["id"], "demo::A.x");
        assert_eq!(json["location"]["line"], 2);
    }
}
