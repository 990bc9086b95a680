//! Buffered per-key RGB output.

use smart_leds::{brightness, SmartLedsWrite, RGB8};

use crate::config::KEY_COUNT;
use crate::palette::OFF;

/// Pixel buffer in front of an addressable strip.
///
/// Writes go to the buffer by key index, translated through the key to LED
/// map, and only reach the strip on [`LightPanel::commit`].
pub struct LightPanel<S, const LEDS: usize> {
    strip: S,
    pixels: [RGB8; LEDS],
    map: [usize; KEY_COUNT],
    brightness: u8,
}

impl<S, const LEDS: usize> LightPanel<S, LEDS>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    /// # Panics
    /// If `map` points past the end of the strip.
    pub fn new(strip: S, map: [usize; KEY_COUNT], brightness: u8) -> Self {
        assert!(map.iter().all(|&led| led < LEDS));
        Self {
            strip,
            pixels: [OFF; LEDS],
            map,
            brightness,
        }
    }

    pub fn set_pixel(&mut self, key: usize, color: RGB8) {
        self.pixels[self.map[key]] = color;
    }

    pub fn set_keys(&mut self, keys: &[usize], color: RGB8) {
        for &key in keys {
            self.set_pixel(key, color);
        }
    }

    /// Buffered colour of `key`.
    pub fn pixel(&self, key: usize) -> RGB8 {
        self.pixels[self.map[key]]
    }

    /// Turns every pixel off, including strip pixels no key maps to.
    pub fn clear(&mut self) {
        self.pixels = [OFF; LEDS];
    }

    /// Pushes the buffer to the strip, scaled to the configured brightness.
    pub fn commit(&mut self) -> Result<(), S::Error> {
        self.strip
            .write(brightness(self.pixels.iter().cloned(), self.brightness))
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }
}
