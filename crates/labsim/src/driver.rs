//! Wall-clock driver for live experiment sessions
//!
//! The core timer and accumulator are advanced by whoever owns the clock.
//! This driver is that owner for interactive use: a background thread wakes
//! on a short period and reports what actually elapsed, so accumulation is
//! delta-time based and resilient to scheduler jitter, and emits one
//! countdown tick per whole second for the experiment timer.
//!
//! The thread is cancelled and joined on shutdown (and on drop), so no
//! ticker outlives the session it was driving.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use jiff::SignedDuration;

/// Default wake period for accumulation deltas.
const ACCUMULATE_PERIOD: Duration = Duration::from_millis(100);

/// Event emitted by the driver thread.
#[derive(Debug, Clone, Copy)]
pub enum DriverEvent {
    /// One second of run time elapsed; advance the experiment countdown.
    CountdownTick,
    /// Wall-clock time elapsed since the previous event; advance live
    /// accumulators by `dt`.
    Accumulate { dt: SignedDuration },
}

/// Background ticker for one live session.
#[derive(Debug)]
pub struct SessionDriver {
    event_rx: Receiver<DriverEvent>,
    cancel_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SessionDriver {
    /// Start a driver with the default 100 ms accumulation period.
    #[must_use]
    pub fn start() -> Self {
        Self::with_period(ACCUMULATE_PERIOD)
    }

    /// Start a driver with a custom wake period.
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        let (event_tx, event_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let flag = cancel_flag.clone();

        let thread = thread::spawn(move || run_loop(&event_tx, &flag, period));
        tracing::debug!("session driver started (period={period:?})");

        Self {
            event_rx,
            cancel_flag,
            thread: Some(thread),
        }
    }

    /// Drain one pending event, if any (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<DriverEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Stop the ticker thread and wait for it to exit.
    pub fn shutdown(&mut self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
            tracing::debug!("session driver stopped");
        }
    }
}

impl Drop for SessionDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop(event_tx: &Sender<DriverEvent>, cancel_flag: &AtomicBool, period: Duration) {
    let mut last_wake = Instant::now();
    let mut since_tick = Duration::ZERO;

    while !cancel_flag.load(Ordering::SeqCst) {
        thread::sleep(period);

        let now = Instant::now();
        let elapsed = now - last_wake;
        last_wake = now;

        let dt = SignedDuration::try_from(elapsed).unwrap_or(SignedDuration::ZERO);
        if event_tx.send(DriverEvent::Accumulate { dt }).is_err() {
            // Receiver gone; the session was torn down without shutdown.
            return;
        }

        // Whole seconds of accumulated run time become countdown ticks.
        since_tick += elapsed;
        while since_tick >= Duration::from_secs(1) {
            since_tick -= Duration::from_secs(1);
            if event_tx.send(DriverEvent::CountdownTick).is_err() {
                return;
            }
        }
    }
}
