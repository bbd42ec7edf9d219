use std::time::Duration;
use std::time::Instant;

/// Scroll-position sample from the host's scrollable container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the content scrolled past, in `0.0..=1.0`; `None` for a degenerate
    /// container that cannot scroll.
    pub fn filled_ratio(&self) -> Option<f64> {
        if self.scroll_height <= 0.0 {
            return None;
        }
        Some((self.scroll_top + self.client_height) / self.scroll_height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfiniteScrollOptions {
    pub enabled: bool,
    /// Temporarily pauses triggering without tearing the monitor down.
    pub disabled: bool,
    pub threshold: f64,
    pub debounce: Duration,
    pub cooldown: Duration,
}

impl Default for InfiniteScrollOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            disabled: false,
            threshold: 0.8,
            debounce: Duration::from_millis(200),
            cooldown: Duration::from_millis(1000),
        }
    }
}

/// Threshold-based load triggering over debounced scroll samples.
///
/// The in-flight flag set on trigger clears after a fixed cool-down whether or not the
/// caller's load finished; it is a rate limiter, not a completion signal. A load slower
/// than the cool-down can therefore see an overlapping trigger.
#[derive(Clone, Debug)]
pub struct InfiniteScrollMonitor {
    options: InfiniteScrollOptions,
    last_sample: Option<Instant>,
    cooldown_until: Option<Instant>,
}

impl InfiniteScrollMonitor {
    pub fn new(options: InfiniteScrollOptions) -> Self {
        Self {
            options,
            last_sample: None,
            cooldown_until: None,
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: InfiniteScrollOptions) {
        self.options = options;
    }

    pub fn load_in_flight(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Feeds one scroll sample; returns `true` when a load should start.
    ///
    /// Samples are dropped while the feature is off, the grid is loading, a load is in
    /// flight, or the sample lands inside the debounce window of the previous one.
    pub fn observe(&mut self, metrics: ScrollMetrics, now: Instant, loading: bool) -> bool {
        if !self.options.enabled || self.options.disabled || loading {
            return false;
        }
        if let Some(last) = self.last_sample {
            if now.duration_since(last) < self.options.debounce {
                return false;
            }
        }
        self.last_sample = Some(now);
        if self.load_in_flight(now) {
            return false;
        }
        let Some(ratio) = metrics.filled_ratio() else {
            return false;
        };
        if ratio < self.options.threshold {
            return false;
        }
        self.cooldown_until = Some(now + self.options.cooldown);
        log::debug!("infinite scroll trigger at ratio {ratio:.2}");
        true
    }

    /// Teardown / data-change handler: drops the pending debounce and cool-down state.
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.cooldown_until = None;
    }
}
