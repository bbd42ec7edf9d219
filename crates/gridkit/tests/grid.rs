use std::time::Duration;
use std::time::Instant;

use gridkit::column::ColumnDef;
use gridkit::column::Pin;
use gridkit::column::compute_layout;
use gridkit::grid::GridOptions;
use gridkit::grid::GridState;
use gridkit::grid::RowFormatters;
use gridkit::scroll::ScrollMetrics;
use gridkit::GridEvent;
use gridkit_core::input::KeyCode;
use gridkit_core::input::KeyEvent;
use gridkit_nav::coordinator::NavAction;
use gridkit_nav::FocusableRegion;
use gridkit_nav::NavCoordinator;
use gridkit_nav::RegionRef;

fn grid_with_rows(options: GridOptions, n: u32) -> GridState<u32, u32> {
    let mut grid = GridState::new(options, |row: &u32| *row);
    grid.set_rows((1..=n).collect());
    grid.drain_events();
    grid
}

fn multi_select_options() -> GridOptions {
    GridOptions {
        selectable: true,
        multi_select: true,
        ..Default::default()
    }
}

#[test]
fn explicit_hide_always_beats_show() {
    for (hide, show, visible) in [
        (Some(true), Some(true), false),
        (Some(false), Some(false), true),
        (None, Some(false), false),
        (None, Some(true), true),
        (None, None, true),
    ] {
        let mut def = ColumnDef::new("col");
        def.hide = hide;
        def.show = show;
        assert_eq!(def.is_visible(), visible, "hide={hide:?} show={show:?}");
    }
}

#[test]
fn pin_offsets_use_the_default_width_for_unparsable_values() {
    let defs = vec![
        ColumnDef::new("a").pin(Pin::Left).width("100px"),
        ColumnDef::new("b").pin(Pin::Left).width("50px"),
        ColumnDef::new("c").pin(Pin::Left).width("bad"),
    ];
    let layout = compute_layout(&defs);
    assert_eq!(
        [layout["a"].left, layout["b"].left, layout["c"].left],
        [Some(0), Some(100), Some(150)]
    );
}

#[test]
fn toggle_all_completes_a_partial_selection_then_clears() {
    let mut grid = grid_with_rows(multi_select_options(), 5);
    grid.toggle_row(1);
    grid.toggle_row(3);

    grid.toggle_all();
    assert!(grid.is_all_selected());
    assert_eq!(grid.selected_keys().len(), 5);

    grid.toggle_all();
    assert!(grid.selected_keys().is_empty());

    // From the cleared state two more toggles land back on empty.
    grid.toggle_all();
    grid.toggle_all();
    assert!(grid.selected_keys().is_empty());
}

#[test]
fn toggle_all_skips_disabled_rows_and_still_counts_as_all() {
    let mut grid = grid_with_rows(multi_select_options(), 5);
    grid.set_formatters(RowFormatters {
        disable_row: Some(Box::new(|row: &u32, _| *row == 3)),
        hide_row_checkbox: None,
        cell_class: None,
    });

    grid.toggle_all();
    assert_eq!(grid.selected_keys(), [1, 2, 4, 5]);
    assert!(grid.is_all_selected());
}

#[test]
fn close_others_keeps_only_the_last_expanded_row() {
    let mut grid = grid_with_rows(
        GridOptions {
            expandable: true,
            close_others_on_expand: true,
            ..Default::default()
        },
        2,
    );
    grid.expansion_changed(0, true, None);
    grid.expansion_changed(1, true, None);

    assert!(!grid.expansion().is_expanded(0));
    assert!(grid.expansion().is_expanded(1));
}

#[test]
fn arrow_down_moves_focus_except_at_the_last_region() {
    let mut nav = NavCoordinator::new();
    for name in ["header", "grid", "footer"] {
        nav.register(FocusableRegion::new(name).with_ui(RegionRef::mint()));
    }
    nav.focus_region("header", None);

    let down = KeyEvent::new(KeyCode::Down);
    assert_eq!(nav.handle_key_navigation(&down), NavAction::FocusMoved);
    assert_eq!(nav.focused_region(), Some("grid"));

    nav.focus_region("footer", None);
    // At the last region there is nowhere to go and no escape hatch registered.
    assert_eq!(nav.handle_key_navigation(&down), NavAction::None);
    assert_eq!(nav.focused_region(), Some("footer"));
}

#[test]
fn changing_the_row_data_resets_focus_and_expansion() {
    let mut grid = grid_with_rows(
        GridOptions {
            expandable: true,
            ..Default::default()
        },
        3,
    );
    grid.handle_key(&KeyEvent::new(KeyCode::Down));
    grid.handle_key(&KeyEvent::new(KeyCode::Down));
    grid.toggle_row_expansion(2);
    assert_eq!(grid.focused_row(), Some(1));
    grid.drain_events();

    grid.set_rows(vec![7, 8, 9, 10]);
    assert_eq!(grid.focused_row(), None);
    assert!(grid.expansion().records().iter().all(|r| !r.expanded));
    assert_eq!(grid.expansion().records().len(), 4);
    let events = grid.drain_events();
    assert!(events.contains(&GridEvent::FocusedRowChanged(None)));
    assert!(events.contains(&GridEvent::ScrollToTop));
}

#[test]
fn scroll_past_the_threshold_triggers_exactly_one_load() {
    let mut options = GridOptions::default();
    options.infinite_scroll.enabled = true;
    let mut grid = grid_with_rows(options, 50);

    let metrics = ScrollMetrics {
        scroll_top: 750.0,
        client_height: 200.0,
        scroll_height: 1000.0,
    };
    let t0 = Instant::now();
    grid.observe_scroll(metrics, t0);
    // Resampled past the debounce window but inside the 1s cool-down.
    grid.observe_scroll(metrics, t0 + Duration::from_millis(400));
    grid.observe_scroll(metrics, t0 + Duration::from_millis(800));

    let loads = grid
        .drain_events()
        .into_iter()
        .filter(|e| *e == GridEvent::LoadMore)
        .count();
    assert_eq!(loads, 1);
}
