//! Signature block parsing.

use regex::Regex;

use crate::model::{SignatureBlock, Signatory};

/// Parse the candidate signature lines trailing the document.
///
/// Lines that are blank or contain underscores (the rule lines) are
/// discarded. The first surviving line supplies the name row, the next the
/// title row; each splits on a run of four or more spaces into left and
/// right columns. A line with no such run fills only the left column.
/// Missing lines degrade to empty fields, never an error.
pub fn parse_signature(lines: &[String]) -> SignatureBlock {
    let column_gap = Regex::new(r" {4,}").unwrap();

    let mut survivors = lines
        .iter()
        .map(|l| l.as_str())
        .filter(|l| !l.trim().is_empty() && !l.contains('_'));

    let (left_name, right_name) = split_columns(&column_gap, survivors.next());
    let (left_title, right_title) = split_columns(&column_gap, survivors.next());

    if !lines.is_empty() && left_name.is_empty() && right_name.is_empty() {
        log::warn!("signature region had no parseable name row");
    }

    SignatureBlock::new(
        Signatory::new(left_name, left_title),
        Signatory::new(right_name, right_title),
    )
}

fn split_columns(column_gap: &Regex, line: Option<&str>) -> (String, String) {
    match line {
        None => (String::new(), String::new()),
        Some(line) => {
            let mut parts = column_gap.splitn(line.trim(), 2);
            let left = parts.next().unwrap_or("").trim().to_string();
            let right = parts.next().unwrap_or("").trim().to_string();
            (left, right)
        }
    }
}
