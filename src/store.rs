//! Per-key colour persistence.
//!
//! Each key takes three raw bytes (r, g, b) in key order. Loading accepts
//! only exact palette colours; anything else, including erased memory, comes
//! back as palette entry 0.

use smart_leds::RGB8;

use crate::config::KEY_COUNT;
use crate::palette::ColorSlot;

pub const COLOR_BYTES: usize = KEY_COUNT * 3;

/// Fixed-size durable byte region.
pub trait Storage {
    type Error;

    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Self::Error>;

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T> Storage for &mut T
where
    T: Storage,
{
    type Error = T::Error;

    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, offset, buf)
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, offset, data)
    }
}

pub struct ColorStore<S: Storage> {
    storage: S,
    offset: u16,
}

impl<S: Storage> ColorStore<S> {
    pub fn new(storage: S, offset: u16) -> Self {
        Self { storage, offset }
    }

    pub fn load(&mut self) -> Result<[ColorSlot; KEY_COUNT], S::Error> {
        let mut raw = [0; COLOR_BYTES];
        self.storage.read(self.offset, &mut raw)?;

        let mut slots = [ColorSlot::default(); KEY_COUNT];
        for (slot, rgb) in slots.iter_mut().zip(raw.chunks_exact(3)) {
            *slot = ColorSlot::from_color(RGB8 {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            });
        }

        Ok(slots)
    }

    /// Writes every key, not just the one that changed.
    pub fn save(&mut self, slots: &[ColorSlot; KEY_COUNT]) -> Result<(), S::Error> {
        let mut raw = [0; COLOR_BYTES];
        for (rgb, slot) in raw.chunks_exact_mut(3).zip(slots) {
            let color = slot.color();
            rgb.copy_from_slice(&[color.r, color.g, color.b]);
        }

        self.storage.write(self.offset, &raw)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
