use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

// Upper bound on how long the timer thread sleeps before rechecking its controls.
const NAP: Duration = Duration::from_millis(2);

/// Time between ticks at `speed` ticks per second.
pub fn interval_for(speed: u32) -> Duration {
    if speed <= 1 {
        Duration::from_secs(1)
    } else {
        Duration::from_micros(1_000_000 / u64::from(speed))
    }
}

struct Shared {
    due: AtomicBool,
    // Zero while paused.
    interval_us: AtomicU64,
    // Bumped on every retune so the thread re-arms even if the interval is unchanged.
    epoch: AtomicU64,
    stop: AtomicBool,
}

/// Periodic tick source. A background thread raises the "tick due" flag and
/// the owner clears it with [`Ticker::take_due`]; nothing else crosses over.
pub struct Ticker {
    shared: Arc<Shared>,
    interval: Duration,
    paused: bool,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(speed: u32) -> Self {
        let interval = interval_for(speed);
        let shared = Arc::new(Shared {
            due: AtomicBool::new(false),
            interval_us: AtomicU64::new(interval.as_micros() as u64),
            epoch: AtomicU64::new(0),
            stop: AtomicBool::new(false),
        });
        let handle = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || run(&shared))
        };
        debug!("ticker started at {:?}", interval);
        Ticker { shared, interval, paused: false, handle: Some(handle) }
    }

    /// Clears the flag, returning whether a tick was due.
    pub fn take_due(&self) -> bool {
        self.shared.due.swap(false, Ordering::AcqRel)
    }

    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Retunes to `speed`, restarting the period from now.
    pub fn set_speed(&mut self, speed: u32) {
        self.interval = interval_for(speed);
        self.shared.due.store(false, Ordering::Release);
        if !self.paused {
            self.publish(self.interval);
        }
        debug!("ticker retuned to {:?}", self.interval);
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.publish(Duration::ZERO);
    }

    /// Restarts ticking; the first tick comes one full interval later.
    pub fn resume(&mut self) {
        self.paused = false;
        self.publish(self.interval);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn publish(&self, interval: Duration) {
        self.shared.interval_us.store(interval.as_micros() as u64, Ordering::Release);
        self.shared.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(shared: &Shared) {
    let mut armed: Option<u64> = None;
    let mut deadline = Instant::now();

    while !shared.stop.load(Ordering::Acquire) {
        let epoch = shared.epoch.load(Ordering::Acquire);
        let micros = shared.interval_us.load(Ordering::Acquire);
        if micros == 0 {
            armed = None;
            thread::sleep(NAP);
            continue;
        }

        let now = Instant::now();
        let interval = Duration::from_micros(micros);
        if armed != Some(epoch) {
            armed = Some(epoch);
            deadline = now + interval;
        }

        if now >= deadline {
            shared.due.store(true, Ordering::Release);
            deadline += interval;
            // Don't pile up ticks after a long stall.
            if deadline < now {
                deadline = now + interval;
            }
        } else {
            thread::sleep((deadline - now).min(NAP));
        }
    }
}
