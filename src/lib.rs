//! Input-to-action logic for a seven-key macro deck with per-key RGB LEDs.
//!
//! Two programs share the hardware: [`deck::MacroDeck`] turns button presses
//! into keyboard chords and cycles a key's colour on a triple press, and
//! [`game::PatternGame`] plays a copy-the-pattern memory game. Both are driven
//! by a polling loop through the capability traits re-exported here, so the
//! whole crate runs (and is tested) off-target.
#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod deck;
pub mod effects;
pub mod game;
pub mod hid;
pub mod input;
pub mod light;
pub mod palette;
pub mod store;
pub mod window;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, TickCounter};
pub use hid::{KeyChord, KeyReporter};
pub use input::RawButtons;
pub use store::Storage;

pub use smart_leds::RGB8;
