use crate::expand::ExpansionChange;
use crate::sort::PageRequest;
use crate::sort::SortState;

/// Events published by [`crate::grid::GridState`].
///
/// Events accumulate in the grid's queue in emission order and are handed to the caller
/// through `drain_events`; there is no ambient subscription machinery. Selection
/// mutations publish on two channels (`SelectionChanged` and `RowSelectionChanged`) with
/// the same ordered key list, for consumers with differing expectations.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent<K> {
    PageChange(PageRequest),
    SortChange(SortState),
    RowClick { index: usize },
    SelectionChanged(Vec<K>),
    RowSelectionChanged(Vec<K>),
    CellClick { index: usize, field: String },
    CellSelectionChanged { index: usize, field: String },
    ExpansionChanged(ExpansionChange),
    RowContextMenu { index: usize },
    RowActivated { index: usize },
    FocusedRowChanged(Option<usize>),
    LoadMore,
    ScrollToTop,
}
