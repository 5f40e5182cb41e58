//! Periodic removal of DOM nodes flagged for deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Other parts of the page tag leftover nodes with a marker attribute. The
//! sweeper owns one recurring timer and, on each tick, detaches every node
//! carrying that marker. Unmarked nodes are never touched.
//!
//! DESIGN
//! ======
//! The DOM and the timer sit behind `SweepTarget` and `IntervalScheduler` so
//! the state machine runs unchanged in the browser and in unit tests. The
//! timer handle lives inside `ActiveSweep`; dropping the sweep releases the
//! handle, and releasing the handle cancels the timer.
//!
//! ERROR HANDLING
//! ==============
//! Sweeping is best-effort. A failed tick returns `Err(SweepError)`, which is
//! counted in `SweepStats` and then dropped. Failures are not logged and never
//! stop later ticks.

#[cfg(test)]
#[path = "sweep_test.rs"]
mod sweep_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Interval between sweep ticks.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Attribute that marks a node as safe to delete.
pub const DEFAULT_REMOVAL_MARKER: &str = "data-sweep-remove";

/// Sweeper settings, resolved by the parent view and passed in explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweeperConfig {
    /// When set, the sweeper never schedules a timer.
    pub dev_mode: bool,
    pub interval: Duration,
    pub marker: &'static str,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            interval: DEFAULT_SWEEP_INTERVAL,
            marker: DEFAULT_REMOVAL_MARKER,
        }
    }
}

impl SweeperConfig {
    /// Build a config whose development flag comes from the compile-time
    /// `LEPTOS_ENV` value set by cargo-leptos.
    pub fn from_build_env() -> Self {
        Self {
            dev_mode: is_development_env(option_env!("LEPTOS_ENV")),
            ..Self::default()
        }
    }
}

/// Whether an environment value names development mode.
pub fn is_development_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v.eq_ignore_ascii_case("dev") || v.eq_ignore_ascii_case("development")
    })
}

/// CSS attribute selector for a removal marker.
pub fn marker_selector(marker: &str) -> String {
    format!("[{marker}]")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
    #[error("no document available")]
    NoDocument,
    #[error("marker query failed: {0}")]
    Query(String),
    #[error("failed to detach node: {0}")]
    Detach(String),
}

/// Something that can detach every node carrying a marker attribute.
pub trait SweepTarget {
    /// Detach all marked nodes, returning how many were removed.
    fn remove_marked(&self, marker: &str) -> Result<usize, SweepError>;
}

impl<T: SweepTarget + ?Sized> SweepTarget for Rc<T> {
    fn remove_marked(&self, marker: &str) -> Result<usize, SweepError> {
        (**self).remove_marked(marker)
    }
}

/// Recurring timer source. Dropping the returned handle must cancel the timer.
pub trait IntervalScheduler {
    type Handle;

    fn schedule(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Run a single sweep tick against `target`.
pub fn sweep_once<T: SweepTarget + ?Sized>(target: &T, marker: &str) -> Result<usize, SweepError> {
    target.remove_marked(marker)
}

/// Tick counters for an active sweep.
#[derive(Debug, Default)]
pub struct SweepStats {
    ticks: Cell<u64>,
    removed: Cell<u64>,
    failed: Cell<u64>,
}

impl SweepStats {
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    pub fn removed(&self) -> u64 {
        self.removed.get()
    }

    pub fn failed(&self) -> u64 {
        self.failed.get()
    }

    fn record(&self, outcome: &Result<usize, SweepError>) {
        self.ticks.set(self.ticks.get() + 1);
        match outcome {
            Ok(count) => {
                let count = u64::try_from(*count).unwrap_or(u64::MAX);
                self.removed.set(self.removed.get().saturating_add(count));
            }
            Err(_) => self.failed.set(self.failed.get() + 1),
        }
    }
}

/// A running sweep. Owns the timer handle; dropping it cancels the timer.
#[derive(Debug)]
pub struct ActiveSweep<H> {
    _timer: H,
    stats: Rc<SweepStats>,
}

impl<H> Drop for ActiveSweep<H> {
    fn drop(&mut self) {
        log::debug!("dom sweeper stopped after {} ticks", self.stats.ticks());
    }
}

/// Lifecycle of one sweeper mount.
#[derive(Debug)]
pub enum SweeperState<H> {
    /// Development mode: no timer was created.
    Inert,
    Active(ActiveSweep<H>),
}

impl<H> SweeperState<H> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Counters for the active sweep, `None` when inert.
    pub fn stats(&self) -> Option<Rc<SweepStats>> {
        match self {
            Self::Inert => None,
            Self::Active(active) => Some(Rc::clone(&active.stats)),
        }
    }

    /// Cancel the timer. Equivalent to dropping the state.
    pub fn stop(self) {}
}

/// Mount a sweeper: stay inert in development mode, otherwise register one
/// recurring timer that sweeps `target` on every tick.
pub fn start_sweeper<S, T>(config: &SweeperConfig, target: T, scheduler: &S) -> SweeperState<S::Handle>
where
    S: IntervalScheduler,
    T: SweepTarget + 'static,
{
    if config.dev_mode {
        log::debug!("dom sweeper inert: development mode");
        return SweeperState::Inert;
    }

    let stats = Rc::new(SweepStats::default());
    let tick_stats = Rc::clone(&stats);
    let marker = config.marker;
    let timer = scheduler.schedule(
        config.interval,
        Box::new(move || {
            // Outcome is tallied and intentionally discarded.
            let outcome = sweep_once(&target, marker);
            tick_stats.record(&outcome);
        }),
    );
    log::debug!(
        "dom sweeper started: marker={marker} interval_ms={}",
        config.interval.as_millis()
    );
    SweeperState::Active(ActiveSweep { _timer: timer, stats })
}
