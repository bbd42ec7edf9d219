use gridkit_core::input::KeyCode;
use gridkit_core::input::KeyEvent;
use gridkit_core::keymap;

/// What a key press means for row navigation inside a single region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowNavAction {
    None,
    /// The focused row index changed.
    FocusChanged(usize),
    /// The region cannot move further up; control is ceded to the coordinator's
    /// escape hatch (e.g. to jump focus to a search box above the grid).
    Ceded,
    Activated(usize),
    ToggleSelection(usize),
}

/// Key bindings for in-region row traversal.
#[derive(Clone, Debug)]
pub struct RowBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub first: Vec<KeyEvent>,
    pub last: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
    pub toggle_select: Vec<KeyEvent>,
}

impl Default for RowBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyEvent::new(KeyCode::Up), keymap::key_char('k')],
            down: vec![KeyEvent::new(KeyCode::Down), keymap::key_char('j')],
            first: vec![KeyEvent::new(KeyCode::Home), keymap::key_char('g')],
            last: vec![KeyEvent::new(KeyCode::End), keymap::key_char('G')],
            activate: vec![KeyEvent::new(KeyCode::Enter)],
            toggle_select: vec![keymap::key_char(' ')],
        }
    }
}

impl RowBindings {
    /// Resolves `key` against the current row pointer.
    ///
    /// Only actual index changes surface as [`RowNavAction::FocusChanged`]; a computed
    /// index equal to the current one is reported as [`RowNavAction::None`].
    pub fn handle_row_key(
        &self,
        key: &KeyEvent,
        current: Option<usize>,
        count: usize,
    ) -> RowNavAction {
        if self.matches(&self.up, key) {
            return match current {
                None | Some(0) => RowNavAction::Ceded,
                Some(c) => RowNavAction::FocusChanged(c - 1),
            };
        }
        if count == 0 {
            return RowNavAction::None;
        }
        if self.matches(&self.down, key) {
            let next = current.map_or(0, |c| c + 1).min(count - 1);
            return self.focus_if_changed(next, current);
        }
        if self.matches(&self.first, key) {
            return self.focus_if_changed(0, current);
        }
        if self.matches(&self.last, key) {
            return self.focus_if_changed(count - 1, current);
        }
        if self.matches(&self.activate, key) {
            return current.map_or(RowNavAction::None, RowNavAction::Activated);
        }
        if self.matches(&self.toggle_select, key) {
            return current.map_or(RowNavAction::None, RowNavAction::ToggleSelection);
        }
        RowNavAction::None
    }

    fn focus_if_changed(&self, next: usize, current: Option<usize>) -> RowNavAction {
        if Some(next) == current {
            RowNavAction::None
        } else {
            RowNavAction::FocusChanged(next)
        }
    }

    fn matches(&self, patterns: &[KeyEvent], key: &KeyEvent) -> bool {
        patterns.iter().any(|p| keymap::key_event_matches(p, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn down_clamps_to_the_last_row() {
        let b = RowBindings::default();
        assert_eq!(
            b.handle_row_key(&key(KeyCode::Down), Some(3), 5),
            RowNavAction::FocusChanged(4)
        );
        assert_eq!(b.handle_row_key(&key(KeyCode::Down), Some(4), 5), RowNavAction::None);
    }

    #[test]
    fn up_at_the_first_row_cedes_control() {
        let b = RowBindings::default();
        assert_eq!(b.handle_row_key(&key(KeyCode::Up), Some(0), 5), RowNavAction::Ceded);
        assert_eq!(b.handle_row_key(&key(KeyCode::Up), None, 5), RowNavAction::Ceded);
        assert_eq!(
            b.handle_row_key(&key(KeyCode::Up), Some(2), 5),
            RowNavAction::FocusChanged(1)
        );
    }

    #[test]
    fn home_and_end_jump_only_when_the_index_changes() {
        let b = RowBindings::default();
        assert_eq!(
            b.handle_row_key(&key(KeyCode::End), Some(0), 9),
            RowNavAction::FocusChanged(8)
        );
        assert_eq!(b.handle_row_key(&key(KeyCode::Home), Some(0), 9), RowNavAction::None);
    }

    #[test]
    fn activation_and_selection_need_a_focused_row() {
        let b = RowBindings::default();
        assert_eq!(b.handle_row_key(&key(KeyCode::Enter), None, 3), RowNavAction::None);
        assert_eq!(
            b.handle_row_key(&key(KeyCode::Enter), Some(1), 3),
            RowNavAction::Activated(1)
        );
        assert_eq!(
            b.handle_row_key(&keymap::key_char(' '), Some(2), 3),
            RowNavAction::ToggleSelection(2)
        );
    }
}
