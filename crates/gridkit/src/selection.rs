use indexmap::IndexSet;
use std::hash::Hash;

/// Tracks the set of selected row keys.
///
/// Keys preserve selection order, so the list handed to change events is deterministic.
/// Invariant: with multi-select off the set never holds more than one key.
#[derive(Clone, Debug)]
pub struct SelectionModel<K> {
    selected: IndexSet<K>,
    multi: bool,
}

impl<K: Eq + Hash + Clone> SelectionModel<K> {
    pub fn new(multi: bool) -> Self {
        Self {
            selected: IndexSet::new(),
            multi,
        }
    }

    pub fn multi(&self) -> bool {
        self.multi
    }

    /// Switching modes always starts from a fresh empty set.
    pub fn set_multi(&mut self, multi: bool) {
        self.multi = multi;
        self.selected = IndexSet::new();
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The current selection in selection order.
    pub fn keys(&self) -> Vec<K> {
        self.selected.iter().cloned().collect()
    }

    /// Returns whether the set changed.
    pub fn select(&mut self, key: K) -> bool {
        if self.multi {
            return self.selected.insert(key);
        }
        if self.selected.contains(&key) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(key);
        true
    }

    pub fn deselect(&mut self, key: &K) -> bool {
        self.selected.shift_remove(key)
    }

    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.contains(&key) {
            self.deselect(&key)
        } else {
            self.select(key)
        }
    }

    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Wholesale replacement from an externally supplied pre-selection.
    pub fn assign(&mut self, keys: impl IntoIterator<Item = K>) {
        let mut next: IndexSet<K> = keys.into_iter().collect();
        if !self.multi && next.len() > 1 {
            next.truncate(1);
        }
        self.selected = next;
    }

    /// Select-all / clear-all over `(key, disabled)` candidate pairs.
    ///
    /// Disabled candidates never participate: they are neither selected nor counted when
    /// deciding whether "all" are already selected. Returns whether the set changed.
    pub fn toggle_all(&mut self, candidates: impl IntoIterator<Item = (K, bool)>) -> bool {
        if !self.multi {
            log::debug!("toggle_all ignored: selection is in single-select mode");
            return false;
        }
        let selectable: Vec<K> = candidates
            .into_iter()
            .filter_map(|(key, disabled)| (!disabled).then_some(key))
            .collect();
        if self.all_of(&selectable) {
            self.clear()
        } else {
            let mut changed = false;
            for key in selectable {
                changed |= self.selected.insert(key);
            }
            changed
        }
    }

    /// True when every non-disabled candidate is selected; false when none are selectable.
    pub fn is_all_selected(&self, candidates: impl IntoIterator<Item = (K, bool)>) -> bool {
        let selectable: Vec<K> = candidates
            .into_iter()
            .filter_map(|(key, disabled)| (!disabled).then_some(key))
            .collect();
        self.all_of(&selectable)
    }

    fn all_of(&self, keys: &[K]) -> bool {
        !keys.is_empty() && keys.iter().all(|k| self.selected.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_select_holds_at_most_one_key() {
        let mut s = SelectionModel::new(false);
        assert!(s.select(1));
        assert!(s.select(2));
        assert_eq!(s.keys(), [2]);
        assert!(!s.select(2));
    }

    #[test]
    fn switching_modes_discards_the_selection() {
        let mut s = SelectionModel::new(true);
        s.select(1);
        s.select(2);
        s.set_multi(false);
        assert!(s.is_empty());
    }

    #[test]
    fn toggle_all_twice_restores_the_original_set() {
        let mut s = SelectionModel::new(true);
        s.select(1);
        let candidates = || (1..=4).map(|k| (k, false));
        assert!(s.toggle_all(candidates()));
        assert_eq!(s.keys().len(), 4);
        assert!(s.toggle_all(candidates()));
        assert!(s.is_empty());
        // A second full cycle from the empty state is also stable.
        s.toggle_all(candidates());
        s.toggle_all(candidates());
        assert!(s.is_empty());
    }

    #[test]
    fn disabled_rows_never_count_toward_all() {
        let mut s = SelectionModel::new(true);
        let candidates = || (1..=5).map(|k| (k, k == 3));
        assert!(s.toggle_all(candidates()));
        assert_eq!(s.keys(), [1, 2, 4, 5]);
        assert!(s.is_all_selected(candidates()));
        assert!(!s.is_selected(&3));
    }

    #[test]
    fn all_selected_is_false_without_selectable_rows() {
        let s: SelectionModel<u32> = SelectionModel::new(true);
        assert!(!s.is_all_selected([(1, true), (2, true)]));
        assert!(!s.is_all_selected(std::iter::empty()));
    }

    #[test]
    fn assign_respects_the_single_select_invariant() {
        let mut s = SelectionModel::new(false);
        s.assign([7, 8, 9]);
        assert_eq!(s.keys(), [7]);
    }
}
