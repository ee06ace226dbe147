//! # Animation Scheduler
//!
//! A single-slot, restartable periodic job runner used to pace scroll
//! animations.
//!
//! Each scrollable axis owns its own [`Ticker`], so animations on different
//! axes never interfere. Arming an already-armed ticker replaces the previous
//! job; that replacement is the only cancellation mechanism animations need.
//!
//! All timing flows through explicit `Instant` arguments instead of wall-clock
//! reads, so tests drive ticks deterministically without sleeping: the event
//! loop passes the real time, tests pass synthetic instants.

use std::time::{Duration, Instant};

/// A single repeating job slot.
///
/// `start` arms the slot, `clear` disarms it, and [`Ticker::drive`] fires the
/// supplied step function once per elapsed interval.
#[derive(Debug, Default)]
pub struct Ticker {
    job: Option<Job>,
}

#[derive(Debug)]
struct Job {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new() -> Self {
        Self { job: None }
    }

    /// Arm the slot, replacing (and thereby canceling) any previous job.
    ///
    /// The first tick becomes due one `interval` after `now`.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        // A zero interval would make `drive` spin forever.
        let interval = interval.max(Duration::from_millis(1));
        self.job = Some(Job {
            interval,
            next_due: now + interval,
        });
    }

    /// Disarm the slot. Idempotent.
    pub fn clear(&mut self) {
        self.job = None;
    }

    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// Fire `step` once per interval elapsed up to `now`.
    ///
    /// When `step` returns `false` the job is canceled automatically and no
    /// further ticks fire. Does nothing while disarmed.
    pub fn drive(&mut self, now: Instant, mut step: impl FnMut() -> bool) {
        while let Some(job) = self.job.as_mut() {
            if job.next_due > now {
                return;
            }
            job.next_due += job.interval;
            if !step() {
                self.job = None;
            }
        }
    }
}
