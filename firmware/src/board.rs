use arduino_hal::hal::eeprom::OutOfBoundsError;
use arduino_hal::port::mode::{Input, PullUp};
use arduino_hal::port::Pin;
use arduino_hal::spi::{SerialClockRate, Settings};
use hbb_deck::config::KEY_COUNT;
use hbb_deck::{RawButtons, Storage};

pub type Button = Pin<Input<PullUp>>;

pub type Strip = ws2812_spi::Ws2812<arduino_hal::Spi>;

/// The key buttons in key order. Active low, pulled up.
pub struct Buttons {
    pins: [Button; KEY_COUNT],
}

impl Buttons {
    pub fn new(pins: [Button; KEY_COUNT]) -> Self {
        Self { pins }
    }
}

impl RawButtons for Buttons {
    fn read_level(&mut self, key: usize) -> bool {
        self.pins[key].is_high()
    }
}

pub struct EepromStorage {
    eeprom: arduino_hal::Eeprom,
}

impl EepromStorage {
    pub fn new(eeprom: arduino_hal::Eeprom) -> Self {
        Self { eeprom }
    }
}

impl Storage for EepromStorage {
    type Error = OutOfBoundsError;

    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.eeprom.read(offset, buf)
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Self::Error> {
        self.eeprom.write(offset, data)
    }
}

/// ws2812-spi wants 2 to 3.8 MHz; 16 MHz / 8 is the only divider in range.
pub fn strip_spi_settings() -> Settings {
    Settings {
        clock: SerialClockRate::OscfOver8,
        ..Default::default()
    }
}

/// Locks the PLL to the 48 MHz USB clock (16 MHz crystal).
pub fn enable_usb_pll(pll: &arduino_hal::pac::PLL) {
    // prescale 16MHz crystal -> 8MHz
    pll.pllcsr.write(|w| w.pindiv().set_bit());
    // 96MHz PLL output; /1.5 for 64MHz timers, /2 for 48MHz USB
    pll.pllfrq
        .write(|w| w.pdiv().mhz96().plltm().factor_15().pllusb().set_bit());
    pll.pllcsr.modify(|_, w| w.plle().set_bit());
    while pll.pllcsr.read().plock().bit_is_clear() {}
}

/// Seed from the low bits of a floating analog input.
pub fn noise_seed(mut sample: impl FnMut() -> u16) -> u64 {
    let mut seed: u64 = 0;
    for _ in 0..64 {
        seed = seed.rotate_left(5) ^ u64::from(sample());
        arduino_hal::delay_us(100);
    }
    seed
}
