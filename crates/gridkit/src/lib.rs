//! `gridkit` is the headless state engine behind a data-grid component: it owns columns,
//! selection, sorting/paging, row expansion, keyboard focus, and infinite scroll, and
//! leaves rendering entirely to the host.
//!
//! ## Design
//!
//! - Event-driven and synchronous: the host routes clicks, key presses, and scroll
//!   samples into [`grid::GridState`]; every engine is a plain state machine and nothing
//!   blocks.
//! - Explicit outputs: state changes surface as [`event::GridEvent`]s drained from a
//!   queue in deterministic order, not through ambient reactivity.
//! - Defensive no-ops over errors: out-of-range indices, absent formatters, and
//!   unparsable column widths all degrade to a permissive default instead of failing.
//!
//! Cross-component arrow-key focus handoff lives in the sibling `gridkit-nav` crate;
//! [`grid::GridState::handle_key`] reports when it cedes control so the host can forward
//! the key to the coordinator there.
//!
//! ## Getting started
//!
//! Entry points:
//! - [`grid::GridState`]: the composed engine.
//! - [`column::ColumnDef`] / [`column::compute_layout`]: visibility and pin offsets.
//! - [`selection::SelectionModel`]: row-identity selection set.
//! - [`sort::SortPageController`]: front-end vs. external sort/page switching.
//! - [`expand::ExpansionTracker`]: per-row expand/collapse with close-others.
//! - [`scroll::InfiniteScrollMonitor`]: threshold-triggered load-more.

pub mod column;
pub mod event;
pub mod expand;
pub mod field;
pub mod grid;
pub mod scroll;
pub mod selection;
pub mod sort;

pub use column::ColumnDef;
pub use column::ColumnLayout;
pub use column::Pin;
pub use event::GridEvent;
pub use expand::ExpansionChange;
pub use expand::ExpansionTracker;
pub use grid::GridOptions;
pub use grid::GridState;
pub use grid::RowFormatters;
pub use scroll::InfiniteScrollMonitor;
pub use scroll::InfiniteScrollOptions;
pub use scroll::ScrollMetrics;
pub use selection::SelectionModel;
pub use sort::PageRequest;
pub use sort::SortDirection;
pub use sort::SortPageController;
pub use sort::SortState;
