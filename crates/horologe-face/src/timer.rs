//! Repeating timers.
//!
//! [`TimerHost`] is the seam the scheduler registers its tick with.
//! [`TokioTimerHost`] runs ticks on a tokio runtime; [`ManualTimerHost`]
//! fires them only when told how much time has passed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Callback fired on every tick.
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Shortest period a host will schedule; zero would spin.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Something that can run a callback at a fixed interval until cancelled.
pub trait TimerHost {
    type Handle;

    /// Fires `tick` every `period`, first after one full period.
    fn set_interval(&mut self, period: Duration, tick: TickFn) -> Self::Handle;

    fn clear_interval(&mut self, handle: Self::Handle);
}

// ── tokio ─────────────────────────────────────────────────────────────────

/// Runs each interval as a task on a tokio runtime.
///
/// The runtime must have its time driver enabled.
#[derive(Debug, Clone)]
pub struct TokioTimerHost {
    runtime: Handle,
}

impl TokioTimerHost {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Binds to the runtime the caller is running inside of.
    pub fn try_current() -> Result<Self, tokio::runtime::TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl TimerHost for TokioTimerHost {
    type Handle = JoinHandle<()>;

    fn set_interval(&mut self, period: Duration, mut tick: TickFn) -> JoinHandle<()> {
        let period = period.max(MIN_PERIOD);
        self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            // A late tick repaints once; there is nothing to catch up on.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                tick();
            }
        })
    }

    fn clear_interval(&mut self, handle: JoinHandle<()>) {
        handle.abort();
    }
}

// ── manual ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimerId(u64);

struct ManualTimer {
    id: TimerId,
    period: Duration,
    next_due: Duration,
    tick: TickFn,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic host driven by [`advance`](Self::advance).
///
/// Clones share the same timers, so a test can keep one clone while the
/// scheduler owns another. Ticks run with the host locked; a tick must not
/// call back into the host.
#[derive(Clone, Default)]
pub struct ManualTimerHost {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, firing every tick that falls due in
    /// chronological order. Returns the number of ticks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let mut state = self.lock();
        let target = state.now + by;
        let mut fired = 0;

        loop {
            let due = state
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| (t.next_due, t.id.0));
            let Some(timer) = due else { break };

            let at = timer.next_due;
            timer.next_due += timer.period;
            (timer.tick)();
            state.now = at;
            fired += 1;
        }

        state.now = target;
        fired
    }

    /// Time elapsed since the host was created.
    pub fn elapsed(&self) -> Duration {
        self.lock().now
    }

    /// Number of registered timers.
    pub fn active(&self) -> usize {
        self.lock().timers.len()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TimerHost for ManualTimerHost {
    type Handle = TimerId;

    fn set_interval(&mut self, period: Duration, tick: TickFn) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let mut state = self.lock();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let next_due = state.now + period;
        state.timers.push(ManualTimer { id, period, next_due, tick });
        id
    }

    fn clear_interval(&mut self, handle: TimerId) {
        self.lock().timers.retain(|t| t.id != handle);
    }
}

impl std::fmt::Debug for ManualTimerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ManualTimerHost")
            .field("now", &state.now)
            .field("timers", &state.timers.len())
            .finish()
    }
}
