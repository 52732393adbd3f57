//! Search operator chips and cursor-aware insertion.
//!
//! The search bar offers a curated set of query operators (`site:`,
//! `filetype:`, …). Clicking one splices its text into the query at the
//! current selection and moves the cursor past it.

use serde::Serialize;

/// A search operator offered as a quick-insert chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOperator {
    /// Label shown on the chip.
    pub label: &'static str,
    /// Text spliced into the query.
    pub insert: &'static str,
}

/// Curated operators, in display order.
pub const OPERATORS: &[SearchOperator] = &[
    SearchOperator { label: "site:", insert: "site:" },
    SearchOperator { label: "intitle:", insert: "intitle:" },
    SearchOperator { label: "inurl:", insert: "inurl:" },
    SearchOperator { label: "filetype:", insert: "filetype:" },
    SearchOperator { label: "ext:", insert: "ext:" },
    SearchOperator { label: "\"exact\"", insert: "\"\"" },
    SearchOperator { label: "-exclude", insert: "-" },
    SearchOperator { label: "define:", insert: "define:" },
    SearchOperator { label: "after:", insert: "after:" },
    SearchOperator { label: "before:", insert: "before:" },
];

/// Look up an operator by its chip label.
pub fn find(label: &str) -> Option<&'static SearchOperator> {
    OPERATORS.iter().find(|op| op.label == label)
}

/// Result of splicing text into a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The updated query.
    pub text: String,
    /// Cursor position (in chars) just after the inserted text.
    pub cursor: usize,
}

/// Replace the char range `start..end` of `text` with `insert`.
///
/// Positions are char indices, as reported by a text field. Out-of-range
/// positions are clamped and a reversed range is swapped.
pub fn insert_at(text: &str, start: usize, end: usize, insert: &str) -> Insertion {
    let len = text.chars().count();
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = start.min(len);
    let end = end.min(len);

    let head: String = text.chars().take(start).collect();
    let tail: String = text.chars().skip(end).collect();
    Insertion {
        text: format!("{head}{insert}{tail}"),
        cursor: start + insert.chars().count(),
    }
}
