use similar::{ChangeTag, TextDiff};

use crate::model::InlineDiffPart;

/// Word-level diff of a modified line pair. Whitespace shared at the start
/// and end of both lines is emitted as its own Unchanged part; only the core
/// in between is tokenized.
pub fn diff_words(old_line: &str, new_line: &str) -> Vec<InlineDiffPart> {
    if old_line == new_line {
        if old_line.is_empty() {
            return Vec::new();
        }
        return vec![InlineDiffPart::Unchanged(old_line.to_string())];
    }

    let prefix = common_whitespace_prefix(old_line, new_line);
    let old_rest = &old_line[prefix..];
    let new_rest = &new_line[prefix..];
    // Scanning the remainder keeps prefix and suffix from overlapping.
    let suffix = common_whitespace_suffix(old_rest, new_rest);

    let old_core = &old_rest[..old_rest.len() - suffix];
    let new_core = &new_rest[..new_rest.len() - suffix];

    let mut parts = Vec::new();
    if prefix > 0 {
        parts.push(InlineDiffPart::Unchanged(old_line[..prefix].to_string()));
    }
    diff_cores(&mut parts, old_core, new_core);
    if suffix > 0 {
        parts.push(InlineDiffPart::Unchanged(
            old_rest[old_rest.len() - suffix..].to_string(),
        ));
    }

    parts
}

fn diff_cores(parts: &mut Vec<InlineDiffPart>, old_core: &str, new_core: &str) {
    let start = parts.len();
    let diff = TextDiff::from_words(old_core, new_core);

    for change in diff.iter_all_changes() {
        let value = change.value().to_string();
        let part = match change.tag() {
            ChangeTag::Equal => InlineDiffPart::Unchanged(value),
            ChangeTag::Delete => InlineDiffPart::Remove(value),
            ChangeTag::Insert => InlineDiffPart::Add(value),
        };
        push_part(parts, start, part);
    }
}

/// Appends a part, merging into the previous one when the kind matches.
/// Parts before `start` (the shared leading whitespace) are never merged into.
fn push_part(parts: &mut Vec<InlineDiffPart>, start: usize, part: InlineDiffPart) {
    if part.value().is_empty() {
        return;
    }

    if parts.len() > start
        && let Some(last) = parts.last_mut()
    {
        let merged = match (last, &part) {
            (InlineDiffPart::Unchanged(last), InlineDiffPart::Unchanged(value))
            | (InlineDiffPart::Add(last), InlineDiffPart::Add(value))
            | (InlineDiffPart::Remove(last), InlineDiffPart::Remove(value)) => {
                last.push_str(value);
                true
            }
            _ => false,
        };
        if merged {
            return;
        }
    }

    parts.push(part);
}

fn common_whitespace_prefix(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb || !ca.is_whitespace() {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

fn common_whitespace_suffix(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb || !ca.is_whitespace() {
            break;
        }
        len += ca.len_utf8();
    }
    len
}
