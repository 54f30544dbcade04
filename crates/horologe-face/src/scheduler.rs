use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use horologe_engine::time::WallClock;

use crate::document::SurfaceDocument;
use crate::renderer;
use crate::timer::TimerHost;

/// Document shared between the scheduler and its timer task.
pub type SharedDocument = Arc<Mutex<SurfaceDocument>>;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_MARKER: &str = "clockClass";

/// Repaint cadence and the class that marks clock surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub interval: Duration,
    pub marker: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { interval: DEFAULT_INTERVAL, marker: DEFAULT_MARKER.to_string() }
    }
}

/// One repaint over every marked surface. Cloned into the timer callback.
#[derive(Clone)]
struct RepaintPass {
    document: SharedDocument,
    clock: Arc<dyn WallClock>,
    marker: String,
}

impl RepaintPass {
    fn run(&self) -> usize {
        let time = self.clock.sample();
        // A poisoned lock still holds paintable surfaces.
        let mut doc = self.document.lock().unwrap_or_else(PoisonError::into_inner);

        let mut painted = 0;
        for surface in doc.by_class_mut(&self.marker) {
            renderer::paint(surface, &time);
            painted += 1;
        }

        log::trace!("repainted {painted} surface(s) with class {}", self.marker);
        painted
    }
}

/// Starts and stops the repeating repaint of every surface carrying the marker class.
///
/// At most one timer is active; holding a handle is what "running" means.
/// Dropping a running scheduler cancels its timer.
pub struct Scheduler<H: TimerHost> {
    config: SchedulerConfig,
    pass: RepaintPass,
    host: H,
    handle: Option<H::Handle>,
}

impl<H: TimerHost> Scheduler<H> {
    pub fn new(document: SharedDocument, clock: Arc<dyn WallClock>, host: H, config: SchedulerConfig) -> Self {
        let pass = RepaintPass { document, clock, marker: config.marker.clone() };
        Self { config, pass, host, handle: None }
    }

    /// Repaints immediately, then starts the timer if stopped or stops it if running.
    pub fn toggle(&mut self) {
        self.repaint_now();

        match self.handle.take() {
            Some(handle) => {
                self.host.clear_interval(handle);
                log::debug!("clock scheduler stopped");
            }
            None => {
                let pass = self.pass.clone();
                let handle = self.host.set_interval(
                    self.config.interval,
                    Box::new(move || {
                        pass.run();
                    }),
                );
                self.handle = Some(handle);
                log::debug!(
                    "clock scheduler started: every {:?} for class {}",
                    self.config.interval,
                    self.config.marker
                );
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// One repaint pass without touching the timer. Returns the number of
    /// surfaces painted.
    pub fn repaint_now(&self) -> usize {
        self.pass.run()
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    #[inline]
    pub fn document(&self) -> &SharedDocument {
        &self.pass.document
    }
}

impl<H: TimerHost> Drop for Scheduler<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.clear_interval(handle);
            log::debug!("clock scheduler dropped while running; timer cancelled");
        }
    }
}
