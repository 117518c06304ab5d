//! Registry of reading marks keyed by declaration
//!
//! The `#[read]` attribute is erased at compile time, so the registry is the
//! only place marks can be queried. It is filled by the scanner, keeps
//! declaration order, and enforces one mark per declaration.

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::decl::{DeclId, SourceLocation};
use crate::error::RegistryError;
use readmark_syntax::{ReadingMark, Status, Target};

/// One marked declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// What kind of declaration carries the mark
    pub kind: Target,

    /// Status and notes
    pub mark: ReadingMark,

    /// Where the mark was written
    pub location: SourceLocation,
}

impl Entry {
    /// Create a new entry.
    pub fn new(kind: Target, mark: ReadingMark, location: SourceLocation) -> Self {
        Self {
            kind,
            mark,
            location,
        }
    }

    /// Shorthand for `self.mark.status()`.
    pub fn status(&self) -> Status {
        self.mark.status()
    }
}

/// Marks collected from source, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    entries: IndexMap<DeclId, Entry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mark.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMark` if `id` is already marked; the registry is
    /// left unchanged.
    pub fn insert(&mut self, id: DeclId, entry: Entry) -> Result<(), RegistryError> {
        match self.entries.entry(id) {
            MapEntry::Occupied(existing) => Err(RegistryError::DuplicateMark {
                id: existing.key().clone(),
                first: existing.get().location.clone(),
                second: entry.location,
            }),
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Look up the mark on a declaration.
    pub fn get(&self, id: &DeclId) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Whether a declaration is marked.
    pub fn contains(&self, id: &DeclId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of marked declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeclId, &Entry)> {
        self.entries.iter()
    }

    /// Entries with the given status, in declaration order.
    pub fn with_status(&self, status: Status) -> impl Iterator<Item = (&DeclId, &Entry)> {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.status() == status)
    }

    /// Move every entry of `other` into this registry.
    ///
    /// # Errors
    ///
    /// Stops at the first declaration marked in both.
    pub fn merge(&mut self, other: Registry) -> Result<(), RegistryError> {
        for (id, entry) in other.entries {
            self.insert(id, entry)?;
        }
        Ok(())
    }

    /// Count entries per status.
    pub fn progress(&self) -> Progress {
        self.entries
            .values()
            .fold(Progress::default(), |mut progress, entry| {
                progress.record(entry.status());
                progress
            })
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a DeclId, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, DeclId, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reading progress over a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Marked declarations
    pub total: usize,
    /// `UN_READ`
    pub unread: usize,
    /// `READING`
    pub reading: usize,
    /// `HAVE_READ`
    pub read: usize,
    /// `NOTICE`
    pub notice: usize,
}

impl Progress {
    fn record(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Unread => self.unread += 1,
            Status::Reading => self.reading += 1,
            Status::Read => self.read += 1,
            Status::Notice => self.notice += 1,
        }
    }

    /// Count for one status.
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Unread => self.unread,
            Status::Reading => self.reading,
            Status::Read => self.read,
            Status::Notice => self.notice,
        }
    }

    /// Share of marked declarations that are `HAVE_READ`, 0-100.
    pub fn percent_read(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.read as f64 * 100.0 / self.total as f64
        }
    }
}
