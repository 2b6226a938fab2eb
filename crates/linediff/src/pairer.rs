use crate::inline::diff_words;
use crate::matcher::{BlockKind, RawBlock};
use crate::model::LineDiff;

/// Converts raw blocks into typed line records. A Delete block immediately
/// followed by an Insert block is paired positionally: lines present on both
/// sides become Change records, the overhang becomes plain Remove or Add
/// records. Counters are 1-based and advance per stream.
pub fn pair_blocks(blocks: &[RawBlock]) -> Vec<LineDiff> {
    let mut records = Vec::new();
    let mut old_line = 1usize;
    let mut new_line = 1usize;

    let mut index = 0;
    while index < blocks.len() {
        let block = &blocks[index];
        match block.kind {
            BlockKind::Equal => {
                for line in &block.lines {
                    records.push(LineDiff::Context {
                        content: line.clone(),
                        old_line,
                        new_line,
                    });
                    old_line += 1;
                    new_line += 1;
                }
                index += 1;
            }
            BlockKind::Delete => {
                let paired_insert = blocks
                    .get(index + 1)
                    .filter(|next| next.kind == BlockKind::Insert);

                if let Some(insert) = paired_insert {
                    emit_paired(
                        &mut records,
                        &block.lines,
                        &insert.lines,
                        &mut old_line,
                        &mut new_line,
                    );
                    index += 2;
                } else {
                    for line in &block.lines {
                        records.push(remove_record(line.clone(), old_line));
                        old_line += 1;
                    }
                    index += 1;
                }
            }
            BlockKind::Insert => {
                for line in &block.lines {
                    records.push(add_record(line.clone(), new_line));
                    new_line += 1;
                }
                index += 1;
            }
        }
    }

    debug_assert_eq!(old_line - 1, side_len(blocks, BlockKind::Insert));
    debug_assert_eq!(new_line - 1, side_len(blocks, BlockKind::Delete));

    records
}

fn emit_paired(
    records: &mut Vec<LineDiff>,
    removed: &[String],
    added: &[String],
    old_line: &mut usize,
    new_line: &mut usize,
) {
    for position in 0..removed.len().max(added.len()) {
        match (removed.get(position), added.get(position)) {
            (Some(old_content), Some(new_content)) => {
                records.push(LineDiff::Change {
                    old_content: old_content.clone(),
                    new_content: new_content.clone(),
                    old_line: *old_line,
                    new_line: *new_line,
                    inline_diffs: diff_words(old_content, new_content),
                    remove_is_top_edge: false,
                    remove_is_bottom_edge: false,
                    add_is_top_edge: false,
                    add_is_bottom_edge: false,
                });
                *old_line += 1;
                *new_line += 1;
            }
            (Some(old_content), None) => {
                records.push(remove_record(old_content.clone(), *old_line));
                *old_line += 1;
            }
            (None, Some(new_content)) => {
                records.push(add_record(new_content.clone(), *new_line));
                *new_line += 1;
            }
            (None, None) => {}
        }
    }
}

fn remove_record(content: String, old_line: usize) -> LineDiff {
    LineDiff::Remove {
        content,
        old_line,
        is_top_edge: false,
        is_bottom_edge: false,
    }
}

fn add_record(content: String, new_line: usize) -> LineDiff {
    LineDiff::Add {
        content,
        new_line,
        is_top_edge: false,
        is_bottom_edge: false,
    }
}

fn side_len(blocks: &[RawBlock], skip: BlockKind) -> usize {
    blocks
        .iter()
        .filter(|block| block.kind != skip)
        .map(|block| block.lines.len())
        .sum()
}
