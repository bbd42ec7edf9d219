#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionRecord {
    pub expanded: bool,
}

/// Payload published with every expansion mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionChange {
    pub expanded: bool,
    pub index: usize,
    pub column: Option<String>,
}

/// Per-row expand/collapse state, index-aligned with the current row list.
///
/// Mutations replace the backing vec instead of editing it in place, so a snapshot taken
/// before a toggle never aliases the records after it; `generation` tells diffing
/// consumers that the state moved.
#[derive(Clone, Debug)]
pub struct ExpansionTracker {
    enabled: bool,
    close_others: bool,
    records: Vec<ExpansionRecord>,
    generation: u64,
}

impl ExpansionTracker {
    pub fn new(enabled: bool, close_others: bool) -> Self {
        Self {
            enabled,
            close_others,
            records: Vec::new(),
            generation: 0,
        }
    }

    pub fn set_policy(&mut self, enabled: bool, close_others: bool) {
        self.enabled = enabled;
        self.close_others = close_others;
    }

    pub fn records(&self) -> &[ExpansionRecord] {
        &self.records
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.records.get(index).is_some_and(|r| r.expanded)
    }

    /// Row-list-change handler: one collapsed record per row, only while expansion is
    /// enabled.
    pub fn sync_rows(&mut self, count: usize) {
        if !self.enabled {
            return;
        }
        self.records = vec![ExpansionRecord::default(); count];
        self.generation += 1;
    }

    /// Flips the record at `index`; a missing record is a silent no-op.
    pub fn toggle(&mut self, index: usize) -> Option<ExpansionChange> {
        let current = self.records.get(index)?.expanded;
        let mut next = self.records.clone();
        next[index].expanded = !current;
        self.records = next;
        self.generation += 1;
        Some(ExpansionChange {
            expanded: !current,
            index,
            column: None,
        })
    }

    /// Applies an expansion-widget state change.
    ///
    /// With close-others enabled every record collapses first; the record at `index` (if
    /// present) then takes the widget's own opened state. The change is published even
    /// when `index` is out of range.
    pub fn set_expanded(
        &mut self,
        index: usize,
        opened: bool,
        column: Option<String>,
    ) -> ExpansionChange {
        let mut next = self.records.clone();
        if self.close_others {
            for record in &mut next {
                record.expanded = false;
            }
        }
        if let Some(record) = next.get_mut(index) {
            record.expanded = opened;
        }
        self.records = next;
        self.generation += 1;
        ExpansionChange {
            expanded: opened,
            index,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_out_of_range_is_a_silent_noop() {
        let mut t = ExpansionTracker::new(true, false);
        t.sync_rows(2);
        let generation = t.generation();
        assert_eq!(t.toggle(5), None);
        assert_eq!(t.generation(), generation);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut t = ExpansionTracker::new(true, false);
        t.sync_rows(3);
        let change = t.toggle(1).unwrap();
        assert_eq!(
            change,
            ExpansionChange {
                expanded: true,
                index: 1,
                column: None,
            }
        );
        assert!(t.is_expanded(1));
        assert!(!t.toggle(1).unwrap().expanded);
    }

    #[test]
    fn close_others_leaves_a_single_expanded_row() {
        let mut t = ExpansionTracker::new(true, true);
        t.sync_rows(3);
        t.set_expanded(0, true, None);
        t.set_expanded(2, true, Some("details".into()));
        assert!(!t.is_expanded(0));
        assert!(t.is_expanded(2));
        assert_eq!(t.records().iter().filter(|r| r.expanded).count(), 1);
    }

    #[test]
    fn sync_rows_resets_to_collapsed_and_matches_row_count() {
        let mut t = ExpansionTracker::new(true, false);
        t.sync_rows(2);
        t.toggle(0);
        t.sync_rows(4);
        assert_eq!(t.records().len(), 4);
        assert!(t.records().iter().all(|r| !r.expanded));
    }

    #[test]
    fn disabled_tracker_keeps_no_records() {
        let mut t = ExpansionTracker::new(false, false);
        t.sync_rows(5);
        assert!(t.records().is_empty());
        assert_eq!(t.toggle(0), None);
    }

    #[test]
    fn mutation_bumps_the_generation() {
        let mut t = ExpansionTracker::new(true, false);
        t.sync_rows(2);
        let before = t.generation();
        t.toggle(0);
        assert!(t.generation() > before);
    }
}
