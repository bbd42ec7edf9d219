use indexmap::IndexMap;

/// Synthetic column key prepended when the selection checkbox column is shown.
pub const SELECT_COLUMN: &str = "select";

/// Pixel width used when a column width is absent or unparsable.
pub const DEFAULT_WIDTH_PX: u32 = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pin {
    #[default]
    None,
    Left,
    Right,
}

/// Declarative column definition supplied by the caller.
///
/// `field` is a dot-separated path into the row value (see [`crate::field`]). The engine
/// never mutates definitions; derived per-render state lives in [`ColumnLayout`].
#[derive(Clone, Debug)]
pub struct ColumnDef {
    pub field: String,
    pub header: Option<String>,
    pub show: Option<bool>,
    pub hide: Option<bool>,
    pub pin: Pin,
    pub width: Option<String>,
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: None,
            show: None,
            hide: None,
            pin: Pin::None,
            width: None,
            sortable: false,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn hide(mut self, hide: bool) -> Self {
        self.hide = Some(hide);
        self
    }

    pub fn pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Resolved visibility.
    ///
    /// An explicit `hide` wins over `show`; with only `show` set, visibility follows it;
    /// with neither, the column is visible. The asymmetry (`hide` first) is deliberate and
    /// must not be "fixed".
    pub fn is_visible(&self) -> bool {
        match self.hide {
            Some(hide) => !hide,
            None => self.show.unwrap_or(true),
        }
    }

    /// Numeric pixel width, falling back to [`DEFAULT_WIDTH_PX`].
    pub fn width_px(&self) -> u32 {
        parse_width(self.width.as_deref())
    }
}

/// Derived per-render column state, kept in a parallel map keyed by field rather than as
/// cache slots on the caller-owned definitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub visible: bool,
    /// Pixel offset from the left edge for left-pinned columns.
    pub left: Option<u32>,
    /// Pixel offset from the right edge for right-pinned columns; the rightmost pinned
    /// column sits at 0.
    pub right: Option<u32>,
}

/// Recomputes visibility and pin offsets for the current column list.
pub fn compute_layout(defs: &[ColumnDef]) -> IndexMap<String, ColumnLayout> {
    let mut layout: IndexMap<String, ColumnLayout> = defs
        .iter()
        .map(|def| {
            (
                def.field.clone(),
                ColumnLayout {
                    visible: def.is_visible(),
                    left: None,
                    right: None,
                },
            )
        })
        .collect();

    let mut left_acc = 0u32;
    for def in defs {
        if def.pin != Pin::Left || !def.is_visible() {
            continue;
        }
        if let Some(slot) = layout.get_mut(&def.field) {
            slot.left = Some(left_acc);
        }
        left_acc += def.width_px();
    }

    let mut right_acc = 0u32;
    for def in defs.iter().rev() {
        if def.pin != Pin::Right || !def.is_visible() {
            continue;
        }
        if let Some(slot) = layout.get_mut(&def.field) {
            slot.right = Some(right_acc);
        }
        right_acc += def.width_px();
    }

    layout
}

/// Ordered field keys to render, with the synthetic selection column prepended when row
/// selection is active and the checkbox column is not hidden.
pub fn display_keys(defs: &[ColumnDef], selectable: bool, hide_checkbox: bool) -> Vec<String> {
    let mut keys = Vec::with_capacity(defs.len() + 1);
    if selectable && !hide_checkbox {
        keys.push(SELECT_COLUMN.to_string());
    }
    keys.extend(defs.iter().filter(|d| d.is_visible()).map(|d| d.field.clone()));
    keys
}

fn parse_width(width: Option<&str>) -> u32 {
    let Some(width) = width else {
        return DEFAULT_WIDTH_PX;
    };
    let digits: String = width.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(DEFAULT_WIDTH_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_wins_over_show() {
        assert!(!ColumnDef::new("a").hide(true).show(true).is_visible());
        assert!(ColumnDef::new("a").hide(false).show(false).is_visible());
        assert!(ColumnDef::new("a").show(true).is_visible());
        assert!(!ColumnDef::new("a").show(false).is_visible());
        assert!(ColumnDef::new("a").is_visible());
    }

    #[test]
    fn left_pin_offsets_accumulate_with_width_fallback() {
        let defs = vec![
            ColumnDef::new("a").pin(Pin::Left).width("100px"),
            ColumnDef::new("b").pin(Pin::Left).width("50px"),
            ColumnDef::new("c").pin(Pin::Left).width("bad"),
            ColumnDef::new("d").pin(Pin::Left),
        ];
        let layout = compute_layout(&defs);
        assert_eq!(layout["a"].left, Some(0));
        assert_eq!(layout["b"].left, Some(100));
        assert_eq!(layout["c"].left, Some(150));
        // "bad" fell back to the 80px default.
        assert_eq!(layout["d"].left, Some(230));
        assert_eq!(layout["a"].right, None);
    }

    #[test]
    fn rightmost_right_pinned_column_sits_at_zero() {
        let defs = vec![
            ColumnDef::new("a").pin(Pin::Right).width("60px"),
            ColumnDef::new("b").pin(Pin::Right).width("40px"),
        ];
        let layout = compute_layout(&defs);
        assert_eq!(layout["b"].right, Some(0));
        assert_eq!(layout["a"].right, Some(40));
    }

    #[test]
    fn hidden_columns_do_not_shift_pin_offsets() {
        let defs = vec![
            ColumnDef::new("a").pin(Pin::Left).width("100px").hide(true),
            ColumnDef::new("b").pin(Pin::Left).width("50px"),
        ];
        let layout = compute_layout(&defs);
        assert_eq!(layout["b"].left, Some(0));
        assert_eq!(layout["a"].left, None);
    }

    #[test]
    fn selection_key_is_prepended_only_when_active_and_not_hidden() {
        let defs = vec![ColumnDef::new("name"), ColumnDef::new("secret").hide(true)];
        assert_eq!(display_keys(&defs, true, false), ["select", "name"]);
        assert_eq!(display_keys(&defs, true, true), ["name"]);
        assert_eq!(display_keys(&defs, false, false), ["name"]);
    }
}
