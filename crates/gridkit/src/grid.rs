use std::cmp::Ordering;
use std::hash::Hash;
use std::time::Instant;

use gridkit_core::input::KeyEvent;
use gridkit_core::input::KeyModifiers;
use gridkit_nav::row_nav::RowBindings;
use gridkit_nav::row_nav::RowNavAction;
use indexmap::IndexMap;
use serde_json::Value;

use crate::column;
use crate::column::ColumnDef;
use crate::column::ColumnLayout;
use crate::event::GridEvent;
use crate::expand::ExpansionTracker;
use crate::field;
use crate::scroll::InfiniteScrollMonitor;
use crate::scroll::InfiniteScrollOptions;
use crate::scroll::ScrollMetrics;
use crate::selection::SelectionModel;
use crate::sort::PageRequest;
use crate::sort::SortPageController;
use crate::sort::SortState;

/// Grid-level configuration flags.
#[derive(Clone, Debug)]
pub struct GridOptions {
    pub selectable: bool,
    pub multi_select: bool,
    /// Plain clicks extend the selection; otherwise a plain click replaces it and only
    /// ctrl/meta-clicks extend.
    pub multi_select_with_click: bool,
    pub hide_checkbox: bool,
    pub disable_click_selection: bool,
    pub expandable: bool,
    pub close_others_on_expand: bool,
    pub page_on_front: bool,
    pub sort_on_front: bool,
    pub keyboard_navigation: bool,
    pub infinite_scroll: InfiniteScrollOptions,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            selectable: false,
            multi_select: false,
            multi_select_with_click: false,
            hide_checkbox: false,
            disable_click_selection: false,
            expandable: false,
            close_others_on_expand: false,
            page_on_front: true,
            sort_on_front: true,
            keyboard_navigation: true,
            infinite_scroll: InfiniteScrollOptions::default(),
        }
    }
}

pub type RowPredicate<R> = Box<dyn Fn(&R, usize) -> bool>;
pub type CellClassFormatter<R> = Box<dyn Fn(&R, &str) -> Option<String>>;

/// Caller-supplied per-row/per-cell presentation hooks, evaluated on demand.
///
/// Every hook is optional; absence means the permissive default (not disabled, checkbox
/// shown, no class).
pub struct RowFormatters<R> {
    pub disable_row: Option<RowPredicate<R>>,
    pub hide_row_checkbox: Option<RowPredicate<R>>,
    pub cell_class: Option<CellClassFormatter<R>>,
}

impl<R> Default for RowFormatters<R> {
    fn default() -> Self {
        Self {
            disable_row: None,
            hide_row_checkbox: None,
            cell_class: None,
        }
    }
}

/// The composed grid engine.
///
/// Holds the row data and wires the column model, selection engine, sort/page controller,
/// expansion tracker, and infinite scroll monitor together. Interaction events come in
/// through the `on_*`/`handle_*` methods; state changes come out as [`GridEvent`]s via
/// [`GridState::drain_events`]. The rendering layer observes [`GridState::display_keys`],
/// [`GridState::layout`], the selection, and the expansion records.
///
/// `K` is the row identity used for selection, extracted by the `key_of` function so
/// selection survives reordering and data refreshes that keep row identities.
pub struct GridState<R, K> {
    options: GridOptions,
    rows: Vec<R>,
    columns: Vec<ColumnDef>,
    layout: IndexMap<String, ColumnLayout>,
    display_keys: Vec<String>,
    key_of: Box<dyn Fn(&R) -> K>,
    formatters: RowFormatters<R>,
    selection: SelectionModel<K>,
    sort_page: SortPageController,
    expansion: ExpansionTracker,
    scroll: InfiniteScrollMonitor,
    bindings: RowBindings,
    focused_row: Option<usize>,
    loading: bool,
    events: Vec<GridEvent<K>>,
}

impl<R, K: Eq + Hash + Clone> GridState<R, K> {
    pub fn new(options: GridOptions, key_of: impl Fn(&R) -> K + 'static) -> Self {
        let selection = SelectionModel::new(options.multi_select);
        let sort_page = SortPageController::new(options.page_on_front, options.sort_on_front);
        let expansion = ExpansionTracker::new(options.expandable, options.close_others_on_expand);
        let scroll = InfiniteScrollMonitor::new(options.infinite_scroll);
        Self {
            options,
            rows: Vec::new(),
            columns: Vec::new(),
            layout: IndexMap::new(),
            display_keys: Vec::new(),
            key_of: Box::new(key_of),
            formatters: RowFormatters::default(),
            selection,
            sort_page,
            expansion,
            scroll,
            bindings: RowBindings::default(),
            focused_row: None,
            loading: false,
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        if options.multi_select != self.selection.multi() {
            self.selection.set_multi(options.multi_select);
        }
        self.sort_page
            .set_modes(options.page_on_front, options.sort_on_front);
        self.expansion
            .set_policy(options.expandable, options.close_others_on_expand);
        if options.expandable {
            self.expansion.sync_rows(self.rows.len());
        }
        self.scroll.set_options(options.infinite_scroll);
        self.options = options;
        self.recompute_columns();
    }

    pub fn set_formatters(&mut self, formatters: RowFormatters<R>) {
        self.formatters = formatters;
    }

    pub fn set_bindings(&mut self, bindings: RowBindings) {
        self.bindings = bindings;
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replaces the row data.
    ///
    /// This is the row-list-change handler of every engine: the focused row resets, the
    /// expansion records rebuild collapsed, front-end paging restarts, the scroll monitor
    /// re-arms, and the view scrolls back to the top. Selection persists by key identity.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.focused_row = None;
        self.events.push(GridEvent::FocusedRowChanged(None));
        self.expansion.sync_rows(self.rows.len());
        self.sort_page.on_data_changed();
        self.scroll.reset();
        self.events.push(GridEvent::ScrollToTop);
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDef>) {
        self.columns = columns;
        self.recompute_columns();
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Derived per-column state, keyed by field.
    pub fn layout(&self) -> &IndexMap<String, ColumnLayout> {
        &self.layout
    }

    /// Ordered field keys the rendering layer should show.
    pub fn display_keys(&self) -> &[String] {
        &self.display_keys
    }

    pub fn focused_row(&self) -> Option<usize> {
        self.focused_row
    }

    pub fn expansion(&self) -> &ExpansionTracker {
        &self.expansion
    }

    pub fn sort(&self) -> &SortState {
        self.sort_page.sort()
    }

    pub fn page(&self) -> PageRequest {
        self.sort_page.page()
    }

    pub fn selected_keys(&self) -> Vec<K> {
        self.selection.keys()
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selection.is_selected(key)
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Hands the accumulated events to the caller, in emission order.
    pub fn drain_events(&mut self) -> Vec<GridEvent<K>> {
        std::mem::take(&mut self.events)
    }

    pub fn is_row_disabled(&self, index: usize) -> bool {
        match (&self.formatters.disable_row, self.rows.get(index)) {
            (Some(f), Some(row)) => f(row, index),
            _ => false,
        }
    }

    pub fn checkbox_hidden(&self, index: usize) -> bool {
        if self.options.hide_checkbox {
            return true;
        }
        match (&self.formatters.hide_row_checkbox, self.rows.get(index)) {
            (Some(f), Some(row)) => f(row, index),
            _ => false,
        }
    }

    pub fn cell_class(&self, index: usize, field: &str) -> Option<String> {
        let f = self.formatters.cell_class.as_ref()?;
        f(self.rows.get(index)?, field)
    }

    pub fn select_row(&mut self, index: usize) {
        if let Some(key) = self.key_at(index) {
            if self.selection.select(key) {
                self.emit_selection();
            }
        }
    }

    pub fn deselect_row(&mut self, index: usize) {
        if let Some(key) = self.key_at(index) {
            if self.selection.deselect(&key) {
                self.emit_selection();
            }
        }
    }

    pub fn toggle_row(&mut self, index: usize) {
        if let Some(key) = self.key_at(index) {
            if self.selection.toggle(key) {
                self.emit_selection();
            }
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.emit_selection();
        }
    }

    /// Wholesale selection replacement from an external pre-selected input.
    pub fn set_pre_selected(&mut self, keys: impl IntoIterator<Item = K>) {
        self.selection.assign(keys);
        self.emit_selection();
    }

    pub fn toggle_all(&mut self) {
        let candidates: Vec<(K, bool)> = self.selection_candidates();
        if self.selection.toggle_all(candidates) {
            self.emit_selection();
        }
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.selection_candidates())
    }

    /// Routes a row click through the click-to-select policy.
    ///
    /// The click event itself always publishes; selection only mutates when row selection
    /// is enabled, click selection is not globally disabled, and the row is neither
    /// disabled nor checkbox-hidden. Without the multi-select-with-click flag a plain
    /// click first clears the previous selection, so clicking behaves single-select even
    /// in multi-select mode; ctrl/meta-clicks extend instead.
    pub fn on_row_click(&mut self, index: usize, modifiers: KeyModifiers) {
        if index >= self.rows.len() {
            return;
        }
        self.events.push(GridEvent::RowClick { index });
        if !self.options.selectable
            || self.options.disable_click_selection
            || self.is_row_disabled(index)
            || self.checkbox_hidden(index)
        {
            return;
        }
        let key = (self.key_of)(&self.rows[index]);
        let mut changed = false;
        if !self.options.multi_select_with_click && !modifiers.ctrl_or_meta() {
            changed |= self.selection.clear();
        }
        changed |= self.selection.toggle(key);
        if changed {
            self.emit_selection();
        }
    }

    pub fn on_cell_click(&mut self, index: usize, field: &str) {
        if index >= self.rows.len() {
            return;
        }
        self.events.push(GridEvent::CellClick {
            index,
            field: field.to_string(),
        });
        self.events.push(GridEvent::CellSelectionChanged {
            index,
            field: field.to_string(),
        });
    }

    pub fn on_context_menu(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.events.push(GridEvent::RowContextMenu { index });
    }

    pub fn toggle_row_expansion(&mut self, index: usize) {
        if let Some(change) = self.expansion.toggle(index) {
            self.events.push(GridEvent::ExpansionChanged(change));
        }
    }

    /// Applies an expansion-widget state change (close-others policy included).
    pub fn expansion_changed(&mut self, index: usize, opened: bool, column: Option<String>) {
        let change = self.expansion.set_expanded(index, opened, column);
        self.events.push(GridEvent::ExpansionChanged(change));
    }

    pub fn on_sort_change(&mut self, sort: SortState) {
        self.sort_page.on_sort_change(sort.clone());
        self.events.push(GridEvent::SortChange(sort));
    }

    pub fn on_page_change(&mut self, page: PageRequest) {
        self.sort_page.on_page_change(page);
        self.events.push(GridEvent::PageChange(page));
    }

    /// Row indices to render under the current front-end sort and page state.
    pub fn view_indices(&self, cmp: impl Fn(&R, &R) -> Ordering) -> Vec<usize> {
        let order = self.sort_page.sorted_indices(&self.rows, cmp);
        let bounds = self.sort_page.page_bounds(order.len());
        order[bounds].to_vec()
    }

    /// Keyboard navigation within the grid body.
    ///
    /// Returns the resolved action so the host can forward [`RowNavAction::Ceded`] to the
    /// cross-component coordinator's escape hatch.
    pub fn handle_key(&mut self, key: &KeyEvent) -> RowNavAction {
        if !self.options.keyboard_navigation {
            return RowNavAction::None;
        }
        let action = self
            .bindings
            .handle_row_key(key, self.focused_row, self.rows.len());
        match action {
            RowNavAction::FocusChanged(index) => {
                self.focused_row = Some(index);
                self.events.push(GridEvent::FocusedRowChanged(Some(index)));
            }
            RowNavAction::Activated(index) => {
                self.events.push(GridEvent::RowActivated { index });
            }
            RowNavAction::ToggleSelection(index) => {
                if self.options.selectable
                    && !self.is_row_disabled(index)
                    && !self.checkbox_hidden(index)
                {
                    self.toggle_row(index);
                }
            }
            RowNavAction::Ceded | RowNavAction::None => {}
        }
        action
    }

    /// Feeds a scroll-position sample into the infinite scroll monitor.
    pub fn observe_scroll(&mut self, metrics: ScrollMetrics, now: Instant) {
        if self.scroll.observe(metrics, now, self.loading) {
            self.events.push(GridEvent::LoadMore);
        }
    }

    fn recompute_columns(&mut self) {
        self.layout = column::compute_layout(&self.columns);
        self.display_keys = column::display_keys(
            &self.columns,
            self.options.selectable,
            self.options.hide_checkbox,
        );
    }

    fn key_at(&self, index: usize) -> Option<K> {
        self.rows.get(index).map(|row| (self.key_of)(row))
    }

    fn selection_candidates(&self) -> Vec<(K, bool)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let disabled = self
                    .formatters
                    .disable_row
                    .as_ref()
                    .is_some_and(|f| f(row, i));
                ((self.key_of)(row), disabled)
            })
            .collect()
    }

    fn emit_selection(&mut self) {
        let keys = self.selection.keys();
        self.events.push(GridEvent::SelectionChanged(keys.clone()));
        self.events.push(GridEvent::RowSelectionChanged(keys));
    }
}

impl<K: Eq + Hash + Clone> GridState<Value, K> {
    /// [`GridState::view_indices`] using the active sort field as a dot-path into JSON
    /// rows.
    pub fn view_indices_json(&self) -> Vec<usize> {
        match self.sort_page.sort().active.as_deref() {
            Some(path) => self.view_indices(field::json_comparator(path)),
            None => self.view_indices(|_, _| Ordering::Equal),
        }
    }
}
