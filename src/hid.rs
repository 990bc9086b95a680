//! Keyboard chords and the report-emission capability.

/// Modifier bits of the boot keyboard report.
pub const MOD_LEFT_CTRL: u8 = 0x01;
pub const MOD_LEFT_SHIFT: u8 = 0x02;

/// HID usage id of the digit key `1`; `2`..`9` follow consecutively.
pub const KEY_1: u8 = 0x1E;

/// A modifier set plus one keycode, pressed and released together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub modifiers: u8,
    pub keycode: u8,
}

impl KeyChord {
    pub const fn new(modifiers: u8, keycode: u8) -> Self {
        Self {
            modifiers,
            keycode,
        }
    }

    /// Ctrl+Shift plus the digit `n` (1-9).
    pub const fn ctrl_shift_digit(n: u8) -> Self {
        Self::new(MOD_LEFT_CTRL | MOD_LEFT_SHIFT, KEY_1 + n - 1)
    }
}

/// Fire-and-forget keyboard output.
pub trait KeyReporter {
    fn press(&mut self, chord: KeyChord);

    fn release(&mut self, chord: KeyChord);
}

impl<T> KeyReporter for &mut T
where
    T: KeyReporter,
{
    fn press(&mut self, chord: KeyChord) {
        T::press(self, chord)
    }

    fn release(&mut self, chord: KeyChord) {
        T::release(self, chord)
    }
}
