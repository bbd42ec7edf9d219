use std::cmp::Ordering;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort state; `active`/`direction` are `None` when no sort is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub active: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some(field.into()),
            direction: Some(direction),
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.active.is_some() && self.direction.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { index: 0, size: 10 }
    }
}

/// Switches between front-end (client-side slice/sort) and external (server-driven)
/// operation and tracks the current sort/page state.
///
/// In external mode the controller only records and republishes events; the caller is
/// expected to fetch accordingly. Sort state is updated on every sort event regardless of
/// mode.
#[derive(Clone, Debug)]
pub struct SortPageController {
    page_on_front: bool,
    sort_on_front: bool,
    sort: SortState,
    page: PageRequest,
}

impl SortPageController {
    pub fn new(page_on_front: bool, sort_on_front: bool) -> Self {
        Self {
            page_on_front,
            sort_on_front,
            sort: SortState::default(),
            page: PageRequest::default(),
        }
    }

    pub fn set_modes(&mut self, page_on_front: bool, sort_on_front: bool) {
        self.page_on_front = page_on_front;
        self.sort_on_front = sort_on_front;
    }

    pub fn page_on_front(&self) -> bool {
        self.page_on_front
    }

    pub fn sort_on_front(&self) -> bool {
        self.sort_on_front
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn on_sort_change(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn on_page_change(&mut self, page: PageRequest) {
        self.page = page;
    }

    /// Data-reference-change handler. Front-end paging restarts at the first page; the
    /// external mode keeps whatever the server-side pager reports next.
    pub fn on_data_changed(&mut self) {
        if self.page_on_front {
            self.page.index = 0;
        }
    }

    /// Row order under the current front-end sort state.
    ///
    /// Identity order when sorting is external, no sort is active, or the active field is
    /// not the comparator's. The sort is stable so equal rows keep their incoming order.
    pub fn sorted_indices<R>(
        &self,
        rows: &[R],
        cmp: impl Fn(&R, &R) -> Ordering,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        if !self.sort_on_front || !self.sort.is_sorted() {
            return indices;
        }
        let descending = self.sort.direction == Some(SortDirection::Desc);
        indices.sort_by(|&a, &b| {
            let ord = cmp(&rows[a], &rows[b]);
            if descending { ord.reverse() } else { ord }
        });
        indices
    }

    /// The current page's index range over `len` rows; the full range when paging is
    /// external. A page index past the end clamps to an empty range.
    pub fn page_bounds(&self, len: usize) -> Range<usize> {
        if !self.page_on_front || self.page.size == 0 {
            return 0..len;
        }
        let start = (self.page.index * self.page.size).min(len);
        let end = (start + self.page.size).min(len);
        start..end
    }
}
