use crate::collapse::collapse_context;
use crate::document::Document;
use crate::edges::annotate_edges;
use crate::matcher::match_lines;
use crate::model::{DiffOptions, DiffStats, LineDiff, RowKind};
use crate::pairer::pair_blocks;

/// Diffs two texts into renderable rows: line matching, change pairing and
/// context collapsing, without edge annotation. The context radius comes
/// from `options`; `DiffOptions::default()` keeps two lines per side.
pub fn diff_lines(original: &str, revised: &str, options: DiffOptions) -> Vec<LineDiff> {
    let old_doc = Document::from_str(original);
    let new_doc = Document::from_str(revised);

    let blocks = match_lines(&old_doc.lines(), &new_doc.lines());
    let records = pair_blocks(&blocks);
    collapse_context(records, options.context_lines)
}

/// Same as [`diff_lines`] plus top/bottom edge flags for border drawing.
pub fn diff_lines_with_edges(original: &str, revised: &str, options: DiffOptions) -> Vec<LineDiff> {
    let mut records = diff_lines(original, revised, options);
    annotate_edges(&mut records);
    records
}

/// Row counts for the rendering layer. A Change counts on both sides.
pub fn diff_stats(records: &[LineDiff]) -> DiffStats {
    let mut stats = DiffStats::default();
    for record in records {
        match record.kind() {
            RowKind::Add => stats.additions += 1,
            RowKind::Remove => stats.deletions += 1,
            RowKind::Change => {
                stats.additions += 1;
                stats.deletions += 1;
            }
            RowKind::Context | RowKind::Divider => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineDiffPart;

    fn old_side(records: &[LineDiff]) -> String {
        records
            .iter()
            .filter_map(|record| match record {
                LineDiff::Context { content, .. } | LineDiff::Remove { content, .. } => {
                    Some(content.as_str())
                }
                LineDiff::Change { old_content, .. } => Some(old_content.as_str()),
                LineDiff::Add { .. } | LineDiff::Divider { .. } => None,
            })
            .collect()
    }

    fn new_side(records: &[LineDiff]) -> String {
        records
            .iter()
            .filter_map(|record| match record {
                LineDiff::Context { content, .. } | LineDiff::Add { content, .. } => {
                    Some(content.as_str())
                }
                LineDiff::Change { new_content, .. } => Some(new_content.as_str()),
                LineDiff::Remove { .. } | LineDiff::Divider { .. } => None,
            })
            .collect()
    }

    fn kinds(records: &[LineDiff]) -> Vec<RowKind> {
        records.iter().map(|record| record.kind()).collect()
    }

    #[test]
    fn empty_inputs_produce_an_empty_diff() {
        assert!(diff_lines("", "", DiffOptions::default()).is_empty());
    }

    #[test]
    fn identical_texts_produce_only_context_rows() {
        let text = "one\ntwo\nthree\n";
        let records = diff_lines(text, text, DiffOptions::default());
        assert_eq!(records.len(), 3);
        for (index, record) in records.iter().enumerate() {
            match record {
                LineDiff::Context {
                    old_line, new_line, ..
                } => {
                    assert_eq!(old_line, new_line);
                    assert_eq!(*old_line, index + 1);
                }
                other => panic!("expected Context, got {other:?}"),
            }
        }
    }

    #[test]
    fn pure_insertion_yields_a_single_add() {
        let records = diff_lines("", "new line", DiffOptions::default());
        assert_eq!(
            records,
            vec![LineDiff::Add {
                content: "new line".to_string(),
                new_line: 1,
                is_top_edge: false,
                is_bottom_edge: false,
            }]
        );
    }

    #[test]
    fn pure_deletion_yields_a_single_remove() {
        let records = diff_lines("old line", "", DiffOptions::default());
        assert_eq!(
            records,
            vec![LineDiff::Remove {
                content: "old line".to_string(),
                old_line: 1,
                is_top_edge: false,
                is_bottom_edge: false,
            }]
        );
    }

    #[test]
    fn a_modified_line_pairs_into_one_change() {
        let records = diff_lines(
            "line1\nold line\nline3",
            "line1\nnew line\nline3",
            DiffOptions::default(),
        );
        assert_eq!(
            kinds(&records),
            vec![RowKind::Context, RowKind::Change, RowKind::Context]
        );
        match &records[1] {
            LineDiff::Change {
                old_content,
                new_content,
                old_line,
                new_line,
                inline_diffs,
                ..
            } => {
                assert_eq!(old_content, "old line\n");
                assert_eq!(new_content, "new line\n");
                assert_eq!((*old_line, *new_line), (2, 2));
                assert!(
                    inline_diffs
                        .iter()
                        .any(|part| matches!(part, InlineDiffPart::Remove(value) if value == "old"))
                );
                assert!(
                    inline_diffs
                        .iter()
                        .any(|part| matches!(part, InlineDiffPart::Add(value) if value == "new"))
                );
            }
            other => panic!("expected Change, got {other:?}"),
        }
    }

    #[test]
    fn contents_round_trip_when_nothing_collapses() {
        let original = "fn main() {\n    let x = 1;\n    old();\n}\n";
        let revised = "fn main() {\n    let x = 1;\n    new();\n    extra();\n}\n";
        let records = diff_lines(original, revised, DiffOptions::default());
        assert_eq!(old_side(&records), original);
        assert_eq!(new_side(&records), revised);
    }

    #[test]
    fn line_numbers_increase_strictly_per_stream() {
        let original = "a\nb\nc\nd\ne\n";
        let revised = "a\nB\nc\nE\nf\n";
        let records = diff_lines(original, revised, DiffOptions::default());

        let mut last_old = 0;
        let mut last_new = 0;
        for record in &records {
            match record {
                LineDiff::Context {
                    old_line, new_line, ..
                }
                | LineDiff::Change {
                    old_line, new_line, ..
                } => {
                    assert!(*old_line > last_old);
                    assert!(*new_line > last_new);
                    last_old = *old_line;
                    last_new = *new_line;
                }
                LineDiff::Remove { old_line, .. } => {
                    assert!(*old_line > last_old);
                    last_old = *old_line;
                }
                LineDiff::Add { new_line, .. } => {
                    assert!(*new_line > last_new);
                    last_new = *new_line;
                }
                LineDiff::Divider { .. } => {}
            }
        }
    }

    #[test]
    fn far_apart_changes_collapse_around_one_divider() {
        let original =
            "line1\nline2\nline3\nline4\nline5\nline6\nline7\nline8\nline9\nline10\n";
        let revised =
            "changed1\nline2\nline3\nline4\nline5\nline6\nline7\nline8\nline9\nchanged10\n";
        let records = diff_lines(original, revised, DiffOptions::default());

        let dividers = records
            .iter()
            .filter(|record| record.kind() == RowKind::Divider)
            .count();
        let changes = records
            .iter()
            .filter(|record| record.kind() == RowKind::Change)
            .count();
        assert_eq!(dividers, 1);
        assert_eq!(changes, 2);
        assert_eq!(records.len(), 7);
    }

    #[test]
    fn consecutive_adds_form_one_continuous_block() {
        let records = diff_lines_with_edges(
            "above\nbelow\n",
            "above\nfirst\nsecond\nthird\nbelow\n",
            DiffOptions::default(),
        );

        let edges: Vec<(bool, bool)> = records
            .iter()
            .filter_map(|record| match record {
                LineDiff::Add {
                    is_top_edge,
                    is_bottom_edge,
                    ..
                } => Some((*is_top_edge, *is_bottom_edge)),
                _ => None,
            })
            .collect();
        assert_eq!(edges, vec![(true, false), (false, false), (false, true)]);
    }

    #[test]
    fn a_wider_radius_keeps_more_context() {
        let original = "line1\nline2\nline3\nline4\nline5\nline6\nline7\nline8\n";
        let revised = "changed1\nline2\nline3\nline4\nline5\nline6\nline7\nchanged8\n";

        let narrow = diff_lines(original, revised, DiffOptions { context_lines: 1 });
        let wide = diff_lines(original, revised, DiffOptions { context_lines: 3 });
        assert!(narrow.len() < wide.len());
        assert!(
            wide.iter()
                .all(|record| record.kind() != RowKind::Divider)
        );
    }

    #[test]
    fn stats_count_changes_on_both_sides() {
        let records = diff_lines(
            "keep\nold\ngone\n",
            "keep\nnew\nfresh\nmore\n",
            DiffOptions::default(),
        );
        let stats = diff_stats(&records);
        assert_eq!(stats.additions, 3);
        assert_eq!(stats.deletions, 2);
    }
}
