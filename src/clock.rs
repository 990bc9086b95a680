use core::time::Duration;

/// Monotonic time source plus the blocking delay used by timed effects.
pub trait Clock {
    /// Time since boot.
    fn now(&self) -> Duration;

    /// Blocks the whole loop; nothing else is serviced meanwhile.
    fn sleep(&mut self, duration: Duration);

    /// Whether more than `duration` has passed since `start`.
    fn elapsed_over(&self, start: Duration, duration: Duration) -> bool {
        self.now().saturating_sub(start) > duration
    }
}

/// Millisecond count advanced from a timer interrupt.
///
/// Held in 64 bits so it never wraps within any realistic uptime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickCounter {
    millis: u64,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self { millis: 0 }
    }

    pub fn tick(&mut self, increment: u32) {
        self.millis = self.millis.wrapping_add(u64::from(increment));
    }

    pub fn now(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl<T> Clock for &mut T
where
    T: Clock,
{
    fn now(&self) -> Duration {
        T::now(self)
    }

    fn sleep(&mut self, duration: Duration) {
        T::sleep(self, duration)
    }
}
