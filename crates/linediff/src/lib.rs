pub mod collapse;
pub mod diff;
pub mod document;
pub mod edges;
pub mod inline;
pub mod matcher;
pub mod model;
pub mod pairer;

pub use diff::{diff_lines, diff_lines_with_edges, diff_stats};
pub use document::Document;
pub use inline::diff_words;
pub use model::{
    DEFAULT_CONTEXT_LINES, DiffOptions, DiffStats, InlineDiffPart, LineDiff, RowKind,
};
