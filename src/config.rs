use core::time::Duration;

use crate::hid::KeyChord;

pub const KEY_COUNT: usize = 7;

/// Middle button; a double press on it arms the game.
pub const CENTER_KEY: usize = 3;
/// The three middle buttons used by the countdown.
pub const CENTER_KEYS: [usize; 3] = [2, 3, 4];

pub const POLL_INTERVAL: Duration = Duration::from_millis(10);
pub const DECK_SETTLE: Duration = Duration::from_millis(20);
pub const GAME_SETTLE: Duration = Duration::from_millis(100);

pub const TRIPLE_PRESS_INTERVAL: Duration = Duration::from_secs(1);
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_secs(5);
pub const COLLECT_TIMEOUT: Duration = Duration::from_secs(15);

pub const COUNTDOWN_PHASE: Duration = Duration::from_millis(500);
pub const WRONG_HALF_PERIOD: Duration = Duration::from_millis(200);
pub const WRONG_REPEATS: usize = 3;
pub const CORRECT_STEP: Duration = Duration::from_millis(100);
pub const PLAYBACK_ON: Duration = Duration::from_millis(500);
pub const PLAYBACK_OFF: Duration = Duration::from_millis(200);
pub const ACCEPTED_FLASH: Duration = Duration::from_millis(500);

/// 0.3 of full scale.
pub const BRIGHTNESS: u8 = 77;

pub const DECK_LED_COUNT: usize = 8;
pub const DECK_LED_MAP: [usize; KEY_COUNT] = [0, 1, 2, 3, 4, 5, 6];

pub const GAME_LED_COUNT: usize = 7;
pub const GAME_LED_MAP: [usize; KEY_COUNT] = [6, 5, 2, 3, 4, 1, 0];

/// Start of the colour region in persistent storage (3 bytes per key).
pub const COLOR_STORE_OFFSET: u16 = 0;

pub const MAX_PATTERN: usize = 64;

/// Chord emitted by each deck key; the LED slot comes from `DECK_LED_MAP`.
pub const DECK_CHORDS: [KeyChord; KEY_COUNT] = [
    KeyChord::ctrl_shift_digit(1),
    KeyChord::ctrl_shift_digit(2),
    KeyChord::ctrl_shift_digit(3),
    KeyChord::ctrl_shift_digit(4),
    KeyChord::ctrl_shift_digit(5),
    KeyChord::ctrl_shift_digit(6),
    KeyChord::ctrl_shift_digit(7),
];
