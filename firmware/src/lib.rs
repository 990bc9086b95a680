//! Board support for the Pro Micro build of the deck: the millisecond timer
//! and the GPIO, EEPROM, LED strip and USB shims behind the `hbb-deck`
//! capability traits.
#![no_std]
#![feature(abi_avr_interrupt)]

pub mod board;
pub mod millis;
pub mod usb;
