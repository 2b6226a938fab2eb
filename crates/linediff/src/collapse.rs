use crate::model::LineDiff;

/// Drops context lines further than `context_lines` from any change, putting
/// a single Divider in place of each maximal dropped run. A sequence with no
/// changes at all is returned untouched.
pub fn collapse_context(records: Vec<LineDiff>, context_lines: usize) -> Vec<LineDiff> {
    let Some(retained) = retained_flags(&records, context_lines) else {
        return records;
    };

    let mut collapsed = Vec::with_capacity(records.len());
    let mut anchor = 0usize;
    let mut dropping = false;

    for (index, record) in records.into_iter().enumerate() {
        if retained[index] {
            anchor = anchor_line(&record);
            collapsed.push(record);
            dropping = false;
        } else if !dropping {
            collapsed.push(LineDiff::Divider { line: anchor });
            dropping = true;
        }
    }

    collapsed
}

/// `None` when there is no change anywhere, otherwise one flag per record.
fn retained_flags(records: &[LineDiff], radius: usize) -> Option<Vec<bool>> {
    let mut flags = vec![false; records.len()];
    let mut any_change = false;

    for (index, record) in records.iter().enumerate() {
        if !record.is_change() {
            continue;
        }
        any_change = true;
        let start = index.saturating_sub(radius);
        let end = (index + radius).min(records.len() - 1);
        for flag in &mut flags[start..=end] {
            *flag = true;
        }
    }

    any_change.then_some(flags)
}

/// Line marker a Divider inherits: the last retained record's position in
/// whichever stream it belongs to.
fn anchor_line(record: &LineDiff) -> usize {
    match record {
        LineDiff::Context { new_line, .. }
        | LineDiff::Add { new_line, .. }
        | LineDiff::Change { new_line, .. } => *new_line,
        LineDiff::Remove { old_line, .. } => *old_line,
        LineDiff::Divider { line } => *line,
    }
}
