#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use hbb_deck::config::{
    BRIGHTNESS, COLOR_STORE_OFFSET, DECK_CHORDS, DECK_LED_COUNT, DECK_LED_MAP, DECK_SETTLE,
    POLL_INTERVAL,
};
use hbb_deck::deck::MacroDeck;
use hbb_deck::input::InputReader;
use hbb_deck::light::LightPanel;
use hbb_deck::store::ColorStore;
use hbb_deck::Clock;
use hbb_firmware::board::{self, Buttons, EepromStorage};
use hbb_firmware::millis::{millis_init, Millis};
use hbb_firmware::usb::HidKeyboard;
use panic_halt as _;
use ufmt::uwriteln;
use ws2812_spi::Ws2812;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);
    millis_init(dp.TC0);
    board::enable_usb_pll(&dp.PLL);

    unsafe { avr_device::interrupt::enable() };

    let buttons = Buttons::new([
        pins.d2.into_pull_up_input().downgrade(),
        pins.d3.into_pull_up_input().downgrade(),
        pins.d4.into_pull_up_input().downgrade(),
        pins.d5.into_pull_up_input().downgrade(),
        pins.d6.into_pull_up_input().downgrade(),
        pins.d7.into_pull_up_input().downgrade(),
        pins.d8.into_pull_up_input().downgrade(),
    ]);
    let mut input = InputReader::new(buttons, DECK_SETTLE);

    // only MOSI drives the strip, the other SPI pins are unused
    let (spi, _) = arduino_hal::Spi::new(
        dp.SPI,
        pins.d15.into_output(),
        pins.d16.into_output(),
        pins.d14.into_pull_up_input(),
        pins.led_rx.into_output(),
        board::strip_spi_settings(),
    );
    let mut panel =
        LightPanel::<_, DECK_LED_COUNT>::new(Ws2812::new(spi), DECK_LED_MAP, BRIGHTNESS);

    let eeprom = EepromStorage::new(arduino_hal::Eeprom::new(dp.EEPROM));
    let mut store = ColorStore::new(eeprom, COLOR_STORE_OFFSET);

    let usb_bus = atmega_usbd::UsbBus::new(dp.USB_DEVICE);
    let mut keyboard = HidKeyboard::new(&usb_bus);

    let mut clock = Millis;
    let mut deck = MacroDeck::new(DECK_CHORDS, store.load().unwrap());
    deck.show_colors(&mut panel).unwrap();

    uwriteln!(&mut serial, "hbb deck v{}", env!("CARGO_PKG_VERSION")).unwrap_infallible();

    loop {
        let now = clock.now();
        let samples = input.poll(now);

        let changes = deck
            .step(now, &samples, &mut keyboard, &mut panel, &mut store)
            .unwrap();
        for change in changes {
            uwriteln!(&mut serial, "{:?}", change).unwrap_infallible();
        }

        keyboard.poll();
        clock.sleep(POLL_INTERVAL);
    }
}
