//! Revision comparison engine for side-by-side rendering.
//!
//! Produces a line-aligned, token-refined diff of two text revisions. Lines
//! are compared positionally (by index, not by content alignment); modified
//! lines are refined to token-level segments via greedy tokenization and
//! common-affix matching. Every operation is a pure function of its inputs.
//!
//! # Key Types
//!
//! - [`FileDiff`] / [`LineDiff`] -- The aggregate result and its per-line records
//! - [`Segment`] / [`SegmentKind`] -- Token-level fragments of a modified line
//! - [`LineEnding`] -- Line-splitting convention (`\n` or `\r\n`)
//! - [`InputError`] -- Caller-side rejection of binary or non-UTF-8 content
//!
//! The entry point is [`compare`]:
//!
//! ```
//! use revdiff_core::{compare, LineKind};
//!
//! let diff = compare("version 1", "version 2", "v1.txt", "v2.txt");
//! assert_eq!(diff.entries[0].kind, LineKind::Modified);
//! assert_eq!(diff.entries[0].new_text(), "version 2");
//! ```

pub mod affix;
pub mod file_diff;
pub mod input;
pub mod line_diff;
pub mod tokenize;

pub use affix::{common_prefix, common_suffix, split_affixes, AffixSplit};
pub use file_diff::{
    compare, compare_with, diff_lines, diff_lines_with, FileDiff, LineDiff, LineEnding, LineKind,
};
pub use input::{decode_text, InputError};
pub use line_diff::{diff_line, Segment, SegmentKind};
pub use tokenize::split_tokens;
