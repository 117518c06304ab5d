//! The reading mark payload

use serde::{Deserialize, Serialize};

use crate::Status;

/// A reading status plus the reviewer's notes for one declaration.
///
/// Notes (postil) are free text and read top to bottom, so their order is
/// kept exactly as written.
///
/// # Example
///
/// ```
/// use readmark_syntax::{ReadingMark, Status};
///
/// let mark = ReadingMark::new(Status::Read)
///     .with_note("runs once before every test in the file")
///     .with_note("shares one session factory");
///
/// assert_eq!(mark.status(), Status::Read);
/// assert_eq!(mark.notes()[0], "runs once before every test in the file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingMark {
    status: Status,
    #[serde(default)]
    notes: Vec<String>,
}

impl ReadingMark {
    /// Create a mark with the given status and no notes.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            notes: Vec::new(),
        }
    }

    /// Append a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append several notes, keeping their order.
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));
        self
    }

    /// The reading status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The notes, in the order they were written.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}
