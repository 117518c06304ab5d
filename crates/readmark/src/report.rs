//! Rendering of scan results

use serde::Serialize;

use crate::decl::{DeclId, SourceLocation};
use crate::diagnostic::Diagnostic;
use crate::registry::{Entry, Progress, Registry};
use crate::scanner::ScanOutcome;
use readmark_syntax::{Status, Target};

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per mark, notes indented below
    #[default]
    Text,

    /// A single JSON document
    Json,
}

/// A view over a scan outcome, optionally filtered by status.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    registry: &'a Registry,
    diagnostics: &'a [Diagnostic],
    filter: Option<Status>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: &'a DeclId,
    kind: Target,
    status: Status,
    notes: &'a [String],
    location: &'a SourceLocation,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: Vec<JsonEntry<'a>>,
    progress: Progress,
    diagnostics: &'a [Diagnostic],
}

impl<'a> Report<'a> {
    /// Report everything in `outcome`.
    pub fn new(outcome: &'a ScanOutcome) -> Self {
        Self {
            registry: &outcome.registry,
            diagnostics: &outcome.diagnostics,
            filter: None,
        }
    }

    /// Only list entries with `status`. Progress still covers everything.
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.filter = status;
        self
    }

    fn entries(&self) -> impl Iterator<Item = (&'a DeclId, &'a Entry)> + '_ {
        self.registry
            .iter()
            .filter(move |(_, entry)| self.filter.map_or(true, |s| entry.status() == s))
    }

    /// Render in the given format.
    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }

    /// Plain text listing followed by a progress line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (id, entry) in self.entries() {
            out.push_str(&render_entry(id, entry));
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&progress_line(&self.registry.progress()));
        out.push('\n');
        out
    }

    /// JSON document with entries, progress, and diagnostics.
    pub fn render_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            entries: self
                .entries()
                .map(|(id, entry)| JsonEntry {
                    id,
                    kind: entry.kind,
                    status: entry.status(),
                    notes: entry.mark.notes(),
                    location: &entry.location,
                })
                .collect(),
            progress: self.registry.progress(),
            diagnostics: self.diagnostics,
        };
        serde_json::to_string_pretty(&report)
    }
}

/// One entry: a heading line, then each note indented, in order.
pub fn render_entry(id: &DeclId, entry: &Entry) -> String {
    let mut out = format!(
        "[{}] {} {} ({})\n",
        entry.status(),
        entry.kind,
        id,
        entry.location
    );
    for note in entry.mark.notes() {
        out.push_str(&format!("    - {}\n", note));
    }
    out
}

/// Summary such as `4 marked: 2 HAVE_READ, 1 READING, 0 UN_READ, 1 NOTICE (50.0% read)`.
pub fn progress_line(progress: &Progress) -> String {
    format!(
        "{} marked: {} {}, {} {}, {} {}, {} {} ({:.1}% read)",
        progress.total,
        progress.read,
        Status::Read,
        progress.reading,
        Status::Reading,
        progress.unread,
        Status::Unread,
        progress.notice,
        Status::Notice,
        progress.percent_read()
    )
}
