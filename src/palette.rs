//! The fixed colour set shared by both programs.

use smart_leds::RGB8;

const fn rgb(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

pub const OFF: RGB8 = rgb(0, 0, 0);
pub const WHITE: RGB8 = rgb(255, 255, 255);
pub const ORANGE: RGB8 = rgb(255, 165, 0);
pub const RED: RGB8 = rgb(255, 0, 0);
pub const BLUE: RGB8 = rgb(0, 0, 255);
pub const GREEN: RGB8 = rgb(0, 255, 0);
pub const YELLOW: RGB8 = rgb(255, 255, 0);
pub const PURPLE: RGB8 = rgb(128, 0, 128);

/// Ordered palette a deck key cycles through. Index 0 is the fallback for
/// anything unrecognised in storage.
pub const PALETTE: [RGB8; 7] = [WHITE, ORANGE, RED, BLUE, GREEN, YELLOW, PURPLE];

pub const PALETTE_SIZE: usize = PALETTE.len();

/// Position of `color` in [`PALETTE`], if it is one of its entries.
pub fn index_of(color: RGB8) -> Option<usize> {
    PALETTE.iter().position(|&entry| entry == color)
}

/// A key's current colour, as an index into [`PALETTE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorSlot(u8);

impl ColorSlot {
    /// Wraps out-of-range indices back into the palette.
    pub const fn new(index: usize) -> Self {
        Self((index % PALETTE_SIZE) as u8)
    }

    /// Slot for raw stored bytes; unknown colours fall back to index 0.
    pub fn from_color(color: RGB8) -> Self {
        Self::new(index_of(color).unwrap_or(0))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn color(self) -> RGB8 {
        PALETTE[self.0 as usize]
    }

    pub const fn next(self) -> Self {
        Self::new(self.0 as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_test() {
        assert_eq!(index_of(WHITE), Some(0));
        assert_eq!(index_of(PURPLE), Some(6));
        assert_eq!(index_of(rgb(1, 2, 3)), None);
        assert_eq!(index_of(OFF), None);
    }

    #[test]
    fn slot_wraps_test() {
        let last = ColorSlot::new(PALETTE_SIZE - 1);
        assert_eq!(last.color(), PURPLE);
        assert_eq!(last.next(), ColorSlot::new(0));
        assert_eq!(ColorSlot::new(2).next().index(), 3);
    }

    #[test]
    fn unknown_color_defaults_test() {
        assert_eq!(ColorSlot::from_color(rgb(0xff, 0x00, 0xff)).index(), 0);
        assert_eq!(ColorSlot::from_color(ORANGE).index(), 1);
    }
}
