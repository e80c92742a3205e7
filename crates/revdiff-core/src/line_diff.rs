//! Token-level diff of a single modified line pair.
//!
//! Walks the token sequences of both lines with two cursors and classifies
//! each token as unchanged, added, or removed. Partially similar tokens are
//! narrowed to their differing middle via the common-affix matcher; pure
//! number changes stay atomic.

use serde::{Deserialize, Serialize};

use crate::affix::split_affixes;
use crate::tokenize::split_tokens;

/// Classification of a [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both revisions.
    Unchanged,
    /// Present only in the new revision.
    Added,
    /// Present only in the old revision.
    Removed,
}

/// A labeled fragment of one side of a line, the unit consumed by rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The fragment text.
    pub text: String,
    /// How this fragment changed between revisions.
    pub kind: SegmentKind,
}

impl Segment {
    /// An unchanged fragment.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Unchanged,
        }
    }

    /// A fragment present only in the new revision.
    pub fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Added,
        }
    }

    /// A fragment present only in the old revision.
    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Removed,
        }
    }
}

/// Diff two non-identical, non-empty lines at the token level.
///
/// Returns the segment lists for the old and new side. Leading indentation is
/// emitted as unchanged context on its own side and never diffed, even when
/// the two indents differ. Concatenating either side's segment texts
/// reproduces that side's input line exactly.
pub fn diff_line(old_line: &str, new_line: &str) -> (Vec<Segment>, Vec<Segment>) {
    let (old_indent, old_tokens) = split_tokens(old_line);
    let (new_indent, new_tokens) = split_tokens(new_line);

    let mut old_segments = Vec::new();
    let mut new_segments = Vec::new();

    if !old_indent.is_empty() {
        old_segments.push(Segment::unchanged(old_indent));
    }
    if !new_indent.is_empty() {
        new_segments.push(Segment::unchanged(new_indent));
    }

    let mut old_idx = 0;
    let mut new_idx = 0;
    while old_idx < old_tokens.len() || new_idx < new_tokens.len() {
        match (old_tokens.get(old_idx), new_tokens.get(new_idx)) {
            (None, Some(new_tok)) => {
                // Old side exhausted: the rest of the new line is additions.
                new_segments.push(Segment::added(*new_tok));
                new_idx += 1;
            }
            (Some(old_tok), None) => {
                old_segments.push(Segment::removed(*old_tok));
                old_idx += 1;
            }
            (Some(old_tok), Some(new_tok)) if old_tok == new_tok => {
                old_segments.push(Segment::unchanged(*old_tok));
                new_segments.push(Segment::unchanged(*new_tok));
                old_idx += 1;
                new_idx += 1;
            }
            (Some(old_tok), Some(new_tok)) => {
                if is_digit_run(old_tok) && is_digit_run(new_tok) {
                    // A number replaced by a number reads as one atomic
                    // change; never split digits into shared affixes.
                    old_segments.push(Segment::removed(*old_tok));
                    new_segments.push(Segment::added(*new_tok));
                } else {
                    let split = split_affixes(old_tok, new_tok);
                    if split.is_disjoint() {
                        old_segments.push(Segment::removed(*old_tok));
                        new_segments.push(Segment::added(*new_tok));
                    } else {
                        if !split.prefix.is_empty() {
                            old_segments.push(Segment::unchanged(split.prefix));
                            new_segments.push(Segment::unchanged(split.prefix));
                        }
                        if !split.old_mid.is_empty() {
                            old_segments.push(Segment::removed(split.old_mid));
                        }
                        if !split.new_mid.is_empty() {
                            new_segments.push(Segment::added(split.new_mid));
                        }
                        if !split.suffix.is_empty() {
                            old_segments.push(Segment::unchanged(split.suffix));
                            new_segments.push(Segment::unchanged(split.suffix));
                        }
                    }
                }
                old_idx += 1;
                new_idx += 1;
            }
            (None, None) => break,
        }
    }

    (old_segments, new_segments)
}

fn is_digit_run(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
