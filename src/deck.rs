//! Macro keyboard: every key sends a chord, a triple press cycles its colour.

use core::time::Duration;

use heapless::Vec;
use smart_leds::{SmartLedsWrite, RGB8};
use ufmt::derive::uDebug;

use crate::config::{KEY_COUNT, TRIPLE_PRESS_INTERVAL};
use crate::hid::{KeyChord, KeyReporter};
use crate::input::KeySample;
use crate::light::LightPanel;
use crate::palette::ColorSlot;
use crate::store::{ColorStore, Storage};
use crate::window::PressWindow;

/// Presses within the interval that make up a colour change.
pub const TRIPLE_PRESS: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum DeckError<L, S> {
    Led(L),
    Storage(S),
}

/// Logged whenever a triple press moved a key to the next colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub struct ColorChange {
    pub key: usize,
    pub color_index: usize,
}

#[derive(Clone, Debug, Default)]
struct KeyState {
    pressed: bool,
    presses: PressWindow,
}

pub struct MacroDeck {
    chords: [KeyChord; KEY_COUNT],
    keys: [KeyState; KEY_COUNT],
    colors: [ColorSlot; KEY_COUNT],
    triple_interval: Duration,
}

impl MacroDeck {
    pub fn new(chords: [KeyChord; KEY_COUNT], colors: [ColorSlot; KEY_COUNT]) -> Self {
        Self {
            chords,
            keys: Default::default(),
            colors,
            triple_interval: TRIPLE_PRESS_INTERVAL,
        }
    }

    pub fn with_triple_interval(mut self, interval: Duration) -> Self {
        self.triple_interval = interval;
        self
    }

    pub fn colors(&self) -> &[ColorSlot; KEY_COUNT] {
        &self.colors
    }

    /// Lights every key in its current colour.
    pub fn show_colors<P, const LEDS: usize>(
        &self,
        panel: &mut LightPanel<P, LEDS>,
    ) -> Result<(), P::Error>
    where
        P: SmartLedsWrite<Color = RGB8>,
    {
        for (key, slot) in self.colors.iter().enumerate() {
            panel.set_pixel(key, slot.color());
        }
        panel.commit()
    }

    /// Handles one poll of all keys.
    ///
    /// A press sends the chord down and counts towards a triple press; a key
    /// that stays down sends the chord down again every cycle; a release
    /// sends it up.
    pub fn step<K, P, S, const LEDS: usize>(
        &mut self,
        now: Duration,
        samples: &[KeySample; KEY_COUNT],
        keyboard: &mut K,
        panel: &mut LightPanel<P, LEDS>,
        store: &mut ColorStore<S>,
    ) -> Result<Vec<ColorChange, KEY_COUNT>, DeckError<P::Error, S::Error>>
    where
        K: KeyReporter,
        P: SmartLedsWrite<Color = RGB8>,
        S: Storage,
    {
        let mut changes = Vec::new();

        for (key, sample) in samples.iter().enumerate() {
            let chord = self.chords[key];
            let state = &mut self.keys[key];

            match (sample.pressed, state.pressed) {
                (true, false) => {
                    keyboard.press(chord);
                    state.pressed = true;

                    if state.presses.record(now, self.triple_interval) >= TRIPLE_PRESS {
                        state.presses.clear();
                        // one entry per key, so this cannot overflow
                        let _ = changes.push(self.advance_color(key, panel, store)?);
                    }
                }
                (true, true) => keyboard.press(chord),
                (false, true) => {
                    keyboard.release(chord);
                    state.pressed = false;
                }
                (false, false) => {}
            }
        }

        Ok(changes)
    }

    fn advance_color<P, S, const LEDS: usize>(
        &mut self,
        key: usize,
        panel: &mut LightPanel<P, LEDS>,
        store: &mut ColorStore<S>,
    ) -> Result<ColorChange, DeckError<P::Error, S::Error>>
    where
        P: SmartLedsWrite<Color = RGB8>,
        S: Storage,
    {
        let slot = self.colors[key].next();
        self.colors[key] = slot;

        panel.set_pixel(key, slot.color());
        panel.commit().map_err(DeckError::Led)?;
        store.save(&self.colors).map_err(DeckError::Storage)?;

        Ok(ColorChange {
            key,
            color_index: slot.index(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DECK_CHORDS, DECK_LED_MAP};
    use crate::palette::{ORANGE, PALETTE_SIZE, PURPLE, WHITE};
    use crate::test_utils::*;

    struct Rig {
        deck: MacroDeck,
        keyboard: FakeKeyboard,
        panel: LightPanel<FakeStrip, 8>,
        store: ColorStore<FakeStorage<64>>,
    }

    impl Rig {
        fn new() -> Self {
            let mut store = ColorStore::new(FakeStorage::new(), 0);
            let colors = store.load().unwrap();
            Self {
                deck: MacroDeck::new(DECK_CHORDS, colors),
                keyboard: FakeKeyboard::new(),
                panel: LightPanel::new(FakeStrip::new(), DECK_LED_MAP, 255),
                store,
            }
        }

        fn step(&mut self, ms: u64, samples: [KeySample; KEY_COUNT]) -> Vec<ColorChange, KEY_COUNT> {
            self.deck
                .step(
                    Duration::from_millis(ms),
                    &samples,
                    &mut self.keyboard,
                    &mut self.panel,
                    &mut self.store,
                )
                .unwrap()
        }

        /// A press on one poll and the release on the next.
        fn tap(&mut self, ms: u64, key: usize) -> Vec<ColorChange, KEY_COUNT> {
            let changes = self.step(ms, pressed(key));
            self.step(ms + 10, released(key));
            changes
        }
    }

    #[test]
    fn press_and_release_send_chord_test() {
        let mut rig = Rig::new();
        let chord = DECK_CHORDS[2];

        rig.step(0, pressed(2));
        rig.step(10, released(2));
        rig.step(20, idle());

        assert_eq!(
            rig.keyboard.take(),
            [Report::Press(chord), Report::Release(chord)]
        );
    }

    #[test]
    fn held_key_repeats_press_every_cycle_test() {
        let mut rig = Rig::new();
        let chord = DECK_CHORDS[0];

        rig.step(0, pressed(0));
        for t in 1..=3 {
            rig.step(t * 10, held(0));
        }
        rig.step(40, released(0));

        assert_eq!(
            rig.keyboard.take(),
            [
                Report::Press(chord),
                Report::Press(chord),
                Report::Press(chord),
                Report::Press(chord),
                Report::Release(chord),
            ]
        );
    }

    #[test]
    fn triple_press_advances_color_and_saves_test() {
        let mut rig = Rig::new();

        assert!(rig.tap(0, 4).is_empty());
        assert!(rig.tap(300, 4).is_empty());
        let changes = rig.tap(600, 4);

        assert_eq!(changes, [ColorChange { key: 4, color_index: 1 }]);
        assert_eq!(rig.deck.colors()[4].index(), 1);
        assert_eq!(rig.panel.strip().last()[4], ORANGE);
        assert_eq!(rig.panel.strip().frames.len(), 1);

        // everything was persisted, including the untouched keys
        assert_eq!(rig.store.storage().writes, 1);
        let mut saved = [ColorSlot::new(0); KEY_COUNT];
        saved[4] = ColorSlot::new(1);
        assert_eq!(rig.store.load().unwrap(), saved);
    }

    #[test]
    fn chord_is_still_sent_on_gesture_test() {
        let mut rig = Rig::new();

        rig.tap(0, 1);
        rig.tap(100, 1);
        rig.tap(200, 1);

        let presses = rig
            .keyboard
            .take()
            .into_iter()
            .filter(|report| matches!(report, Report::Press(_)))
            .count();
        assert_eq!(presses, 3);
    }

    #[test]
    fn slow_presses_do_not_count_test() {
        let mut rig = Rig::new();

        for t in [0, 600, 1200, 1800, 2400] {
            assert!(rig.tap(t, 3).is_empty());
        }
        assert_eq!(rig.deck.colors()[3].index(), 0);
        assert_eq!(rig.store.storage().writes, 0);
    }

    #[test]
    fn window_restarts_after_gesture_test() {
        let mut rig = Rig::new();

        rig.tap(0, 6);
        rig.tap(100, 6);
        assert_eq!(rig.tap(200, 6).len(), 1);

        // fourth and fifth press start a new count
        assert!(rig.tap(300, 6).is_empty());
        assert!(rig.tap(400, 6).is_empty());
        assert_eq!(
            rig.tap(500, 6),
            [ColorChange { key: 6, color_index: 2 }]
        );
        assert_eq!(rig.store.storage().writes, 2);
    }

    #[test]
    fn color_wraps_around_palette_test() {
        let mut rig = Rig::new();

        let mut t = 0;
        for _ in 0..PALETTE_SIZE - 1 {
            for _ in 0..3 {
                rig.tap(t, 0);
                t += 100;
            }
            t += 2000;
        }
        assert_eq!(rig.deck.colors()[0].color(), PURPLE);

        for _ in 0..3 {
            rig.tap(t, 0);
            t += 100;
        }
        assert_eq!(rig.deck.colors()[0].index(), 0);
        assert_eq!(rig.panel.strip().last()[0], WHITE);
    }

    #[test]
    fn keys_keep_separate_windows_test() {
        let mut rig = Rig::new();

        rig.tap(0, 0);
        rig.tap(100, 1);
        rig.tap(200, 0);
        rig.tap(300, 1);
        assert_eq!(rig.tap(400, 0), [ColorChange { key: 0, color_index: 1 }]);
        assert_eq!(rig.deck.colors()[1].index(), 0);
    }

    #[test]
    fn show_colors_lights_every_key_test() {
        let mut store = ColorStore::new(
            FakeStorage::<64>::new_with_data(&[255, 165, 0, 128, 0, 128]),
            0,
        );
        let deck = MacroDeck::new(DECK_CHORDS, store.load().unwrap());
        let mut panel = LightPanel::<_, 8>::new(FakeStrip::new(), DECK_LED_MAP, 255);

        deck.show_colors(&mut panel).unwrap();

        let frame = panel.strip().last();
        assert_eq!(frame[0], ORANGE);
        assert_eq!(frame[1], PURPLE);
        assert!(frame[2..7].iter().all(|&p| p == WHITE));
        assert_eq!(frame[7], crate::palette::OFF);
    }
}
