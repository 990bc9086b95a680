#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use hbb_deck::config::{
    BRIGHTNESS, GAME_LED_COUNT, GAME_LED_MAP, GAME_SETTLE, POLL_INTERVAL,
};
use hbb_deck::game::PatternGame;
use hbb_deck::input::InputReader;
use hbb_deck::light::LightPanel;
use hbb_deck::Clock;
use hbb_firmware::board::{self, Buttons};
use hbb_firmware::millis::{millis_init, Millis};
use panic_halt as _;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ufmt::uwriteln;
use ws2812_spi::Ws2812;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);
    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    millis_init(dp.TC0);

    unsafe { avr_device::interrupt::enable() };

    // left unconnected, the readings wander
    let noise = pins.a3.into_analog_input(&mut adc);
    let seed = board::noise_seed(|| noise.analog_read(&mut adc));

    // the game board is wired in a different order than the deck
    let buttons = Buttons::new([
        pins.d8.into_pull_up_input().downgrade(),
        pins.d7.into_pull_up_input().downgrade(),
        pins.d4.into_pull_up_input().downgrade(),
        pins.d5.into_pull_up_input().downgrade(),
        pins.d6.into_pull_up_input().downgrade(),
        pins.d3.into_pull_up_input().downgrade(),
        pins.d2.into_pull_up_input().downgrade(),
    ]);
    let mut input = InputReader::new(buttons, GAME_SETTLE);

    let (spi, _) = arduino_hal::Spi::new(
        dp.SPI,
        pins.d15.into_output(),
        pins.d16.into_output(),
        pins.d14.into_pull_up_input(),
        pins.led_rx.into_output(),
        board::strip_spi_settings(),
    );
    let mut panel =
        LightPanel::<_, GAME_LED_COUNT>::new(Ws2812::new(spi), GAME_LED_MAP, BRIGHTNESS);

    let mut clock = Millis;
    let mut game = PatternGame::new(SmallRng::seed_from_u64(seed));

    uwriteln!(&mut serial, "copy game v{}", env!("CARGO_PKG_VERSION")).unwrap_infallible();

    loop {
        let samples = input.poll(clock.now());

        if let Some(event) = game.step(&samples, &mut panel, &mut clock).unwrap() {
            uwriteln!(&mut serial, "{:?}", event).unwrap_infallible();
        }

        clock.sleep(POLL_INTERVAL);
    }
}
