use crate::model::{LineDiff, RowKind};

/// Marks whether each colored row starts or ends a visually contiguous run,
/// so the renderer only draws borders at run boundaries. A Change record is
/// both a remove-row and an add-row, so it carries a flag pair per side.
pub fn annotate_edges(records: &mut [LineDiff]) {
    let kinds: Vec<RowKind> = records.iter().map(|record| record.kind()).collect();

    for (index, record) in records.iter_mut().enumerate() {
        let previous = index.checked_sub(1).map(|i| kinds[i]);
        let next = kinds.get(index + 1).copied();

        match record {
            LineDiff::Add {
                is_top_edge,
                is_bottom_edge,
                ..
            } => {
                *is_top_edge = top_edge(RowKind::Add, previous);
                *is_bottom_edge = bottom_edge(RowKind::Add, next);
            }
            LineDiff::Remove {
                is_top_edge,
                is_bottom_edge,
                ..
            } => {
                *is_top_edge = top_edge(RowKind::Remove, previous);
                *is_bottom_edge = bottom_edge(RowKind::Remove, next);
            }
            LineDiff::Change {
                remove_is_top_edge,
                remove_is_bottom_edge,
                add_is_top_edge,
                add_is_bottom_edge,
                ..
            } => {
                *remove_is_top_edge = top_edge(RowKind::Remove, previous);
                *remove_is_bottom_edge = bottom_edge(RowKind::Remove, next);
                *add_is_top_edge = top_edge(RowKind::Add, previous);
                *add_is_bottom_edge = bottom_edge(RowKind::Add, next);
            }
            LineDiff::Context { .. } | LineDiff::Divider { .. } => {}
        }
    }
}

fn top_edge(kind: RowKind, previous: Option<RowKind>) -> bool {
    match previous {
        None => true,
        Some(RowKind::Change) => false,
        Some(previous) => previous != kind,
    }
}

fn bottom_edge(kind: RowKind, next: Option<RowKind>) -> bool {
    match (kind, next) {
        (_, None) => true,
        (RowKind::Remove, Some(RowKind::Change)) => false,
        // An add run ending just before a Change still closes its border.
        (RowKind::Add, Some(RowKind::Change)) => true,
        (kind, Some(next)) => next != kind,
    }
}
