use core::cell::Cell;
use core::time::Duration;

use avr_device::interrupt::Mutex;
use hbb_deck::{Clock, TickCounter};

// 16 MHz / 64 / 250 = one compare match per millisecond
const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = 250;
const MILLIS_PER_MATCH: u32 = PRESCALER * TIMER_COUNTS / 16_000;

static TICKS: Mutex<Cell<TickCounter>> = Mutex::new(Cell::new(TickCounter::new()));

/// Starts timer 0 in CTC mode with its compare interrupt enabled.
///
/// Interrupts must be enabled afterwards, otherwise [`millis`] stays at zero.
pub fn millis_init(tc0: arduino_hal::pac::TC0) {
    tc0.tccr0a.write(|w| w.wgm0().ctc());
    tc0.ocr0a.write(|w| w.bits(TIMER_COUNTS as u8));
    tc0.tccr0b.write(|w| w.cs0().prescale_64());
    tc0.timsk0.write(|w| w.ocie0a().set_bit());

    avr_device::interrupt::free(|cs| TICKS.borrow(cs).set(TickCounter::new()));
}

#[allow(non_snake_case)]
#[avr_device::interrupt(atmega32u4)]
fn TIMER0_COMPA() {
    avr_device::interrupt::free(|cs| {
        let cell = TICKS.borrow(cs);
        let mut ticks = cell.get();
        ticks.tick(MILLIS_PER_MATCH);
        cell.set(ticks);
    })
}

pub fn millis() -> Duration {
    avr_device::interrupt::free(|cs| TICKS.borrow(cs).get().now())
}

/// Wall clock for the core logic: the timer-0 count plus busy-wait sleeps.
pub struct Millis;

impl Clock for Millis {
    fn now(&self) -> Duration {
        millis()
    }

    fn sleep(&mut self, duration: Duration) {
        // effects never sleep anywhere near u16::MAX ms
        arduino_hal::delay_ms(duration.as_millis() as _);
    }
}
