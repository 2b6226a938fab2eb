use similar::{DiffTag, TextDiff};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Equal,
    Insert,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

/// Aligns the two line sequences into ordered Equal/Insert/Delete blocks.
/// Replaying Delete+Equal blocks reconstructs the original, Insert+Equal the
/// revised. A replace region becomes an adjacent Delete block followed by an
/// Insert block so the pairer can match the lines positionally.
pub fn match_lines(old_lines: &[String], new_lines: &[String]) -> Vec<RawBlock> {
    let old_refs: Vec<&str> = old_lines.iter().map(|line| line.as_str()).collect();
    let new_refs: Vec<&str> = new_lines.iter().map(|line| line.as_str()).collect();

    let diff = TextDiff::from_slices(&old_refs, &new_refs);
    let mut blocks = Vec::new();

    for op in diff.ops() {
        match op.tag() {
            DiffTag::Equal => blocks.push(RawBlock {
                kind: BlockKind::Equal,
                lines: old_lines[op.old_range()].to_vec(),
            }),
            DiffTag::Delete => blocks.push(RawBlock {
                kind: BlockKind::Delete,
                lines: old_lines[op.old_range()].to_vec(),
            }),
            DiffTag::Insert => blocks.push(RawBlock {
                kind: BlockKind::Insert,
                lines: new_lines[op.new_range()].to_vec(),
            }),
            DiffTag::Replace => {
                blocks.push(RawBlock {
                    kind: BlockKind::Delete,
                    lines: old_lines[op.old_range()].to_vec(),
                });
                blocks.push(RawBlock {
                    kind: BlockKind::Insert,
                    lines: new_lines[op.new_range()].to_vec(),
                });
            }
        }
    }

    blocks
}
