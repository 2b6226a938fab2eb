use serde::{Deserialize, Serialize};

/// Default number of unchanged lines kept on each side of a change.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// One renderable row of the diff. Line numbers are 1-based; contents keep
/// their line terminators so concatenating a side reproduces that side's text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LineDiff {
    Context {
        content: String,
        old_line: usize,
        new_line: usize,
    },
    Add {
        content: String,
        new_line: usize,
        is_top_edge: bool,
        is_bottom_edge: bool,
    },
    Remove {
        content: String,
        old_line: usize,
        is_top_edge: bool,
        is_bottom_edge: bool,
    },
    Change {
        old_content: String,
        new_content: String,
        old_line: usize,
        new_line: usize,
        inline_diffs: Vec<InlineDiffPart>,
        remove_is_top_edge: bool,
        remove_is_bottom_edge: bool,
        add_is_top_edge: bool,
        add_is_bottom_edge: bool,
    },
    Divider {
        line: usize,
    },
}

impl LineDiff {
    pub fn kind(&self) -> RowKind {
        match self {
            LineDiff::Context { .. } => RowKind::Context,
            LineDiff::Add { .. } => RowKind::Add,
            LineDiff::Remove { .. } => RowKind::Remove,
            LineDiff::Change { .. } => RowKind::Change,
            LineDiff::Divider { .. } => RowKind::Divider,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(
            self.kind(),
            RowKind::Add | RowKind::Remove | RowKind::Change
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Context,
    Add,
    Remove,
    Change,
    Divider,
}

/// Word-level fragment of a modified line. Parts minus `Add` concatenate to
/// the old line; parts minus `Remove` concatenate to the new line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum InlineDiffPart {
    Unchanged(String),
    Add(String),
    Remove(String),
}

impl InlineDiffPart {
    pub fn value(&self) -> &str {
        match self {
            InlineDiffPart::Unchanged(value)
            | InlineDiffPart::Add(value)
            | InlineDiffPart::Remove(value) => value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
}
