//! Debounced, edge-detected reading of the key buttons.
//!
//! A raw level change is only accepted once it has stayed put for the settle
//! delay; a level that flips back before then is dropped without an edge.
//! At most one edge per key is reported per poll.

use core::time::Duration;

use crate::config::KEY_COUNT;

/// Raw pin access. Buttons are wired active-low with pull-ups, so `false`
/// means pressed.
pub trait RawButtons {
    fn read_level(&mut self, key: usize) -> bool;
}

impl<T> RawButtons for &mut T
where
    T: RawButtons,
{
    fn read_level(&mut self, key: usize) -> bool {
        T::read_level(self, key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// One key's state after a poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeySample {
    /// Debounced level.
    pub pressed: bool,
    /// Transition accepted during this poll, if any.
    pub edge: Option<Edge>,
}

impl KeySample {
    pub fn just_pressed(&self) -> bool {
        self.edge == Some(Edge::Pressed)
    }

    pub fn just_released(&self) -> bool {
        self.edge == Some(Edge::Released)
    }

    /// Pressed on an earlier poll and still down.
    pub fn held(&self) -> bool {
        self.pressed && self.edge.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Debouncer {
    stable: bool,
    candidate: bool,
    since: Duration,
}

impl Debouncer {
    fn update(&mut self, pressed: bool, now: Duration, settle: Duration) -> Option<Edge> {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.since = now;
        }

        if self.candidate == self.stable || now.saturating_sub(self.since) < settle {
            return None;
        }

        self.stable = self.candidate;
        Some(if self.stable {
            Edge::Pressed
        } else {
            Edge::Released
        })
    }
}

pub struct InputReader<B: RawButtons> {
    buttons: B,
    debouncers: [Debouncer; KEY_COUNT],
    settle: Duration,
}

impl<B: RawButtons> InputReader<B> {
    pub fn new(buttons: B, settle: Duration) -> Self {
        Self {
            buttons,
            debouncers: [Debouncer::default(); KEY_COUNT],
            settle,
        }
    }

    /// Reads every key once.
    pub fn poll(&mut self, now: Duration) -> [KeySample; KEY_COUNT] {
        let mut samples = [KeySample::default(); KEY_COUNT];

        for (key, (debouncer, sample)) in self
            .debouncers
            .iter_mut()
            .zip(samples.iter_mut())
            .enumerate()
        {
            let pressed = !self.buttons.read_level(key);
            sample.edge = debouncer.update(pressed, now, self.settle);
            sample.pressed = debouncer.stable;
        }

        samples
    }

    pub fn is_pressed(&self, key: usize) -> bool {
        self.debouncers[key].stable
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }
}
