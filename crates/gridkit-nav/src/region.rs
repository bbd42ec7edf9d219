use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Opaque handle standing in for a focus-capable UI area.
///
/// The host mints one with [`RegionRef::mint`] when the real UI element is attached and
/// keeps it to unregister the region on teardown. The coordinator compares handles by
/// identity and never touches the element behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionRef(u64);

static NEXT_REGION_REF: AtomicU64 = AtomicU64::new(1);

impl RegionRef {
    pub fn mint() -> Self {
        Self(NEXT_REGION_REF.fetch_add(1, Ordering::Relaxed))
    }
}

pub type RegionCallback = Box<dyn FnMut()>;
pub type FocusChangeCallback = Box<dyn FnMut(Option<usize>)>;

/// A named, independently keyboard-navigable UI area.
///
/// All callbacks are optional; a missing callback is simply never invoked.
pub struct FocusableRegion {
    pub name: String,
    pub ui: Option<RegionRef>,
    pub(crate) on_arrow_up: Option<RegionCallback>,
    pub(crate) on_arrow_down: Option<RegionCallback>,
    pub(crate) on_arrow_left: Option<RegionCallback>,
    pub(crate) on_arrow_right: Option<RegionCallback>,
    pub(crate) on_focus: Option<RegionCallback>,
    pub(crate) on_focus_change: Option<FocusChangeCallback>,
}

impl FocusableRegion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ui: None,
            on_arrow_up: None,
            on_arrow_down: None,
            on_arrow_left: None,
            on_arrow_right: None,
            on_focus: None,
            on_focus_change: None,
        }
    }

    /// Attaches the UI handle. A region without one cannot be registered.
    pub fn with_ui(mut self, ui: RegionRef) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn on_arrow_up(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_arrow_up = Some(Box::new(f));
        self
    }

    pub fn on_arrow_down(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_arrow_down = Some(Box::new(f));
        self
    }

    pub fn on_arrow_left(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_arrow_left = Some(Box::new(f));
        self
    }

    pub fn on_arrow_right(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_arrow_right = Some(Box::new(f));
        self
    }

    /// Called whenever the coordinator hands focus to this region.
    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Called when the shared focused-row index changes while this region is focused.
    pub fn on_focus_change(mut self, f: impl FnMut(Option<usize>) + 'static) -> Self {
        self.on_focus_change = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for FocusableRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusableRegion")
            .field("name", &self.name)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}
