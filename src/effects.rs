//! Fixed light sequences used by the pattern game.
//!
//! Every effect blocks until it has finished and leaves the strip cleared.

use smart_leds::{SmartLedsWrite, RGB8};

use crate::clock::Clock;
use crate::config::{
    ACCEPTED_FLASH, CENTER_KEY, CENTER_KEYS, COUNTDOWN_PHASE, CORRECT_STEP, KEY_COUNT,
    PLAYBACK_OFF, PLAYBACK_ON, WRONG_HALF_PERIOD, WRONG_REPEATS,
};
use crate::light::LightPanel;
use crate::palette::{BLUE, GREEN, OFF, RED, YELLOW};

const COUNTDOWN_COLORS: [RGB8; 3] = [RED, YELLOW, GREEN];

pub fn clear<S, const LEDS: usize>(panel: &mut LightPanel<S, LEDS>) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    panel.clear();
    panel.commit()
}

/// Red, yellow, green on the three middle keys.
pub fn countdown<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    for color in COUNTDOWN_COLORS {
        panel.set_keys(&CENTER_KEYS, color);
        panel.commit()?;
        clock.sleep(COUNTDOWN_PHASE);
        clear(panel)?;
    }
    Ok(())
}

/// Outer keys and the centre key blink red in turn.
pub fn oscillate_wrong<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    for _ in 0..WRONG_REPEATS {
        for (outer, center) in [(RED, OFF), (OFF, RED)] {
            for key in (0..KEY_COUNT).filter(|&key| key != CENTER_KEY) {
                panel.set_pixel(key, outer);
            }
            panel.set_pixel(CENTER_KEY, center);
            panel.commit()?;
            clock.sleep(WRONG_HALF_PERIOD);
        }
    }
    clear(panel)
}

/// Fills the keys green one after another.
pub fn flash_correct<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    for key in 0..KEY_COUNT {
        panel.set_pixel(key, GREEN);
        panel.commit()?;
        clock.sleep(CORRECT_STEP);
    }
    clear(panel)
}

/// Shows one pattern element like a press and release of that key.
pub fn playback_step<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
    key: usize,
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    panel.set_pixel(key, BLUE);
    panel.commit()?;
    clock.sleep(PLAYBACK_ON);
    clear(panel)?;
    clock.sleep(PLAYBACK_OFF);
    Ok(())
}

pub fn play_pattern<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
    pattern: &[usize],
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    for &key in pattern {
        playback_step(panel, clock, key)?;
    }
    Ok(())
}

/// Confirms a press the player just made.
pub fn flash_accepted<S, C, const LEDS: usize>(
    panel: &mut LightPanel<S, LEDS>,
    clock: &mut C,
    key: usize,
) -> Result<(), S::Error>
where
    S: SmartLedsWrite<Color = RGB8>,
    C: Clock,
{
    panel.set_pixel(key, GREEN);
    panel.commit()?;
    clock.sleep(ACCEPTED_FLASH);
    clear(panel)
}
