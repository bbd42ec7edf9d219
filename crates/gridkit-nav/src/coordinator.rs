use gridkit_core::input::KeyCode;
use gridkit_core::input::KeyEvent;
use indexmap::IndexMap;

use crate::region::FocusableRegion;
use crate::region::RegionRef;

/// Outcome of feeding a key into [`NavCoordinator::handle_key_navigation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    None,
    /// Focus moved to another registered region.
    FocusMoved,
    /// The key was delivered to the focused region's own callback.
    Delegated,
}

/// Registry of focusable regions plus the shared focused-row signal.
///
/// Regions are traversed in registration order. The coordinator holds the registry for
/// the lifetime of each registration only; every `register` must be paired with an
/// `unregister` on teardown so destroyed regions never receive callbacks.
#[derive(Default)]
pub struct NavCoordinator {
    regions: IndexMap<String, FocusableRegion>,
    focused: Option<usize>,
    focused_row: Option<usize>,
}

impl NavCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region to the registry.
    ///
    /// A region whose UI handle is not attached yet is skipped with a diagnostic instead
    /// of failing: the host stays functional, it just cannot participate in navigation.
    /// Registering an already present name replaces the previous entry.
    pub fn register(&mut self, region: FocusableRegion) -> bool {
        if region.ui.is_none() {
            log::warn!(
                "focusable region {:?} has no attached UI handle, registration skipped",
                region.name
            );
            return false;
        }
        self.regions.insert(region.name.clone(), region);
        true
    }

    /// Removes the region registered with `ui`, if any.
    ///
    /// If it was the focused region the focus pointer resets to none; pointers at later
    /// regions shift down so they keep tracking the same entry.
    pub fn unregister(&mut self, ui: RegionRef) {
        let Some(idx) = self.regions.values().position(|r| r.ui == Some(ui)) else {
            return;
        };
        self.regions.shift_remove_index(idx);
        match self.focused {
            Some(f) if f == idx => self.focused = None,
            Some(f) if f > idx => self.focused = Some(f - 1),
            _ => {}
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn focused_region(&self) -> Option<&str> {
        self.focused
            .and_then(|i| self.regions.get_index(i))
            .map(|(name, _)| name.as_str())
    }

    /// The shared focused-row index; `None` means no row is focused.
    pub fn focused_row(&self) -> Option<usize> {
        self.focused_row
    }

    /// Focuses the region registered under `name`.
    ///
    /// Forces UI focus through the region's `on_focus` callback and, when `row` is given,
    /// also publishes it as the shared focused-row index.
    pub fn focus_region(&mut self, name: &str, row: Option<usize>) -> bool {
        let Some(idx) = self.regions.get_index_of(name) else {
            log::debug!("focus_region: no region named {name:?}");
            return false;
        };
        self.focused = Some(idx);
        self.invoke_focus(idx);
        if row.is_some() {
            self.update_focused_index(row);
        }
        true
    }

    /// Publishes a new focused-row index and notifies the focused region.
    pub fn update_focused_index(&mut self, row: Option<usize>) {
        self.focused_row = row;
        if let Some(region) = self.focused.and_then(|i| self.regions.get_index_mut(i)) {
            if let Some(cb) = region.1.on_focus_change.as_mut() {
                cb(row);
            }
        }
    }

    /// Row-list-change handler: the shared focused-row index always resets, regardless of
    /// which region is active.
    pub fn reset_focused_row(&mut self) {
        self.update_focused_index(None);
    }

    /// Arrow-key dispatch across regions.
    ///
    /// Up/Down walk the registry in registration order; at the first/last region the
    /// current region's own arrow callback runs instead, as an escape hatch for host-level
    /// navigation. Left/Right only ever delegate to the current region.
    pub fn handle_key_navigation(&mut self, key: &KeyEvent) -> NavAction {
        let Some(idx) = self.focused else {
            return NavAction::None;
        };
        match key.code {
            KeyCode::Up => {
                if idx == 0 {
                    self.delegate(idx, ArrowCallback::Up)
                } else {
                    self.move_focus_to(idx - 1)
                }
            }
            KeyCode::Down => {
                if idx + 1 >= self.regions.len() {
                    self.delegate(idx, ArrowCallback::Down)
                } else {
                    self.move_focus_to(idx + 1)
                }
            }
            KeyCode::Left => self.delegate(idx, ArrowCallback::Left),
            KeyCode::Right => self.delegate(idx, ArrowCallback::Right),
            _ => NavAction::None,
        }
    }

    fn move_focus_to(&mut self, idx: usize) -> NavAction {
        self.focused = Some(idx);
        self.invoke_focus(idx);
        NavAction::FocusMoved
    }

    fn invoke_focus(&mut self, idx: usize) {
        if let Some((_, region)) = self.regions.get_index_mut(idx) {
            if let Some(cb) = region.on_focus.as_mut() {
                cb();
            }
        }
    }

    fn delegate(&mut self, idx: usize, which: ArrowCallback) -> NavAction {
        let Some((_, region)) = self.regions.get_index_mut(idx) else {
            return NavAction::None;
        };
        let cb = match which {
            ArrowCallback::Up => region.on_arrow_up.as_mut(),
            ArrowCallback::Down => region.on_arrow_down.as_mut(),
            ArrowCallback::Left => region.on_arrow_left.as_mut(),
            ArrowCallback::Right => region.on_arrow_right.as_mut(),
        };
        match cb {
            Some(cb) => {
                cb();
                NavAction::Delegated
            }
            None => NavAction::None,
        }
    }
}

#[derive(Clone, Copy)]
enum ArrowCallback {
    Up,
    Down,
    Left,
    Right,
}
