//! Document-level diff: positional line comparison and the aggregate result.
//!
//! Both documents are split into lines and compared at the same index; each
//! line pair gets an unchanged/added/removed/modified verdict, with modified
//! lines delegated to the token differ. Alignment is strictly positional: a
//! single inserted line shifts every following line into `Modified` rather
//! than re-aligning the sequences. That is the intended behavior, not a
//! shortcut around a Myers/LCS diff.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::line_diff::{diff_line, Segment};

/// The per-line verdict of a [`LineDiff`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The line is identical in both revisions.
    Unchanged,
    /// The line exists only in the new revision.
    Added,
    /// The line exists only in the old revision.
    Removed,
    /// The line exists in both revisions with different content.
    Modified,
}

/// One line of the diff: a verdict plus the segments of both sides.
///
/// Concatenating `old_segments` texts reproduces the old line exactly, and
/// likewise for `new_segments`; that reconstruction property is the primary
/// correctness contract of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// 1-based line number.
    pub line_number: usize,
    /// The verdict for this line pair.
    pub kind: LineKind,
    /// Segments of the old side; empty for added lines.
    pub old_segments: Vec<Segment>,
    /// Segments of the new side; empty for removed lines.
    pub new_segments: Vec<Segment>,
}

impl LineDiff {
    /// A line identical in both revisions. An empty `text` represents two
    /// matching blank lines, carried as one empty segment per side rather
    /// than an empty segment list.
    pub fn unchanged(line_number: usize, text: &str) -> Self {
        Self {
            line_number,
            kind: LineKind::Unchanged,
            old_segments: vec![Segment::unchanged(text)],
            new_segments: vec![Segment::unchanged(text)],
        }
    }

    /// A line present only in the new revision.
    pub fn added(line_number: usize, text: &str) -> Self {
        Self {
            line_number,
            kind: LineKind::Added,
            old_segments: Vec::new(),
            new_segments: vec![Segment::added(text)],
        }
    }

    /// A line present only in the old revision.
    pub fn removed(line_number: usize, text: &str) -> Self {
        Self {
            line_number,
            kind: LineKind::Removed,
            old_segments: vec![Segment::removed(text)],
            new_segments: Vec::new(),
        }
    }

    /// A line that changed between revisions, with token-level segments.
    pub fn modified(
        line_number: usize,
        old_segments: Vec<Segment>,
        new_segments: Vec<Segment>,
    ) -> Self {
        Self {
            line_number,
            kind: LineKind::Modified,
            old_segments,
            new_segments,
        }
    }

    /// The old line text, rebuilt from the segments.
    pub fn old_text(&self) -> String {
        self.old_segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// The new line text, rebuilt from the segments.
    pub fn new_text(&self) -> String {
        self.new_segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Line-ending convention used to split documents into lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix `\n` line endings.
    #[default]
    Lf,
    /// Windows `\r\n` line endings.
    CrLf,
}

impl LineEnding {
    fn split(self, text: &str) -> Vec<&str> {
        match self {
            LineEnding::Lf => text.split('\n').collect(),
            LineEnding::CrLf => text.split("\r\n").collect(),
        }
    }
}

/// Diff two documents line by line, splitting on `\n`.
pub fn diff_lines(old_text: &str, new_text: &str) -> Vec<LineDiff> {
    diff_lines_with(old_text, new_text, LineEnding::Lf)
}

/// Diff two documents line by line with an explicit line-ending convention.
///
/// Lines are compared at matching indexes; where one document is shorter, the
/// missing side reads as an empty line.
pub fn diff_lines_with(old_text: &str, new_text: &str, ending: LineEnding) -> Vec<LineDiff> {
    let old_lines = ending.split(old_text);
    let new_lines = ending.split(new_text);
    let count = old_lines.len().max(new_lines.len());

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let old = old_lines.get(i).copied().unwrap_or("");
        let new = new_lines.get(i).copied().unwrap_or("");
        let number = i + 1;

        let entry = if old == new {
            LineDiff::unchanged(number, old)
        } else if old.is_empty() {
            LineDiff::added(number, new)
        } else if new.is_empty() {
            LineDiff::removed(number, old)
        } else {
            let (old_segments, new_segments) = diff_line(old, new);
            LineDiff::modified(number, old_segments, new_segments)
        };
        entries.push(entry);
    }
    entries
}

/// The complete diff of two revisions, ready for side-by-side rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Per-line records, ordered by line number.
    pub entries: Vec<LineDiff>,
    /// Display label for the old revision (e.g. a file name).
    pub old_label: String,
    /// Display label for the new revision.
    pub new_label: String,
}

impl FileDiff {
    /// Returns `true` if the two revisions are identical.
    pub fn is_unchanged(&self) -> bool {
        self.entries.iter().all(|e| e.kind == LineKind::Unchanged)
    }

    /// Number of per-line records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no per-line records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.count(LineKind::Added)
    }

    /// Number of removed lines.
    pub fn removals(&self) -> usize {
        self.count(LineKind::Removed)
    }

    /// Number of modified lines.
    pub fn modifications(&self) -> usize {
        self.count(LineKind::Modified)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// Compare two revisions, splitting on `\n`.
///
/// The labels are opaque display strings owned by the result. The comparison
/// is pure and synchronous; concurrent calls are fully independent.
pub fn compare(
    old_text: &str,
    new_text: &str,
    old_label: impl Into<String>,
    new_label: impl Into<String>,
) -> FileDiff {
    compare_with(old_text, new_text, old_label, new_label, LineEnding::Lf)
}

/// Compare two revisions with an explicit line-ending convention.
pub fn compare_with(
    old_text: &str,
    new_text: &str,
    old_label: impl Into<String>,
    new_label: impl Into<String>,
    ending: LineEnding,
) -> FileDiff {
    debug!(
        old_bytes = old_text.len(),
        new_bytes = new_text.len(),
        ?ending,
        "comparing revisions"
    );
    FileDiff {
        entries: diff_lines_with(old_text, new_text, ending),
        old_label: old_label.into(),
        new_label: new_label.into(),
    }
}
