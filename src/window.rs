//! Time windows behind the multi-press gestures.
//!
//! The triple press and the double press each own one of these; they never
//! share timing state.

use core::time::Duration;

use heapless::Vec;

/// Press times of one key, pruned to a sliding interval.
#[derive(Clone, Debug, Default)]
pub struct PressWindow {
    // a completed gesture clears the window, so it never holds more than
    // one press past the gesture size
    times: Vec<Duration, 4>,
}

impl PressWindow {
    pub const fn new() -> Self {
        Self { times: Vec::new() }
    }

    /// Records a press at `now`, drops presses older than `interval` and
    /// returns how many remain.
    pub fn record(&mut self, now: Duration, interval: Duration) -> usize {
        if self.times.is_full() {
            self.times.remove(0);
        }
        // cannot fail, room was made above
        let _ = self.times.push(now);
        self.times
            .retain(|&pressed| now.saturating_sub(pressed) <= interval);
        self.times.len()
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Rolling press counter whose count only holds while
/// `now - start <= duration`; past that it restarts from zero at `now`.
#[derive(Clone, Copy, Debug)]
pub struct GestureWindow {
    count: u8,
    start: Duration,
    duration: Duration,
}

impl GestureWindow {
    pub const fn new(duration: Duration, now: Duration) -> Self {
        Self {
            count: 0,
            start: now,
            duration,
        }
    }

    pub fn reset(&mut self, now: Duration) {
        self.count = 0;
        self.start = now;
    }

    /// Restarts the window if it ran out. Returns whether it did.
    pub fn expire(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.start) > self.duration {
            self.reset(now);
            true
        } else {
            false
        }
    }

    /// Counts one press and returns the new count.
    pub fn record(&mut self, now: Duration) -> u8 {
        self.expire(now);
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
