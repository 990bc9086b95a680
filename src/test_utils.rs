#![allow(dead_code)]

use core::convert::Infallible;
use core::time::Duration;

use smart_leds::{SmartLedsWrite, RGB8};

use crate::clock::Clock;
use crate::config::KEY_COUNT;
use crate::hid::{KeyChord, KeyReporter};
use crate::input::{KeySample, RawButtons};
use crate::store::Storage;

#[derive(Default)]
pub struct FakeClock {
    pub now: Duration,
    pub slept: Duration,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.slept += duration;
    }
}

/// Electrical levels, idle high.
pub struct FakeButtons {
    pub levels: [bool; KEY_COUNT],
}

impl FakeButtons {
    pub fn new() -> Self {
        Self {
            levels: [true; KEY_COUNT],
        }
    }

    pub fn press(&mut self, key: usize) {
        self.levels[key] = false;
    }

    pub fn release(&mut self, key: usize) {
        self.levels[key] = true;
    }
}

impl RawButtons for FakeButtons {
    fn read_level(&mut self, key: usize) -> bool {
        self.levels[key]
    }
}

/// Records every frame written to it.
#[derive(Default)]
pub struct FakeStrip {
    pub frames: Vec<Vec<RGB8>>,
}

impl FakeStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &[RGB8] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl SmartLedsWrite for FakeStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OutOfBounds;

pub struct FakeStorage<const N: usize> {
    pub data: [u8; N],
    pub writes: usize,
}

impl<const N: usize> FakeStorage<N> {
    /// Erased memory reads back as 0xff.
    pub fn new() -> Self {
        Self::new_with_data(&[])
    }

    pub fn new_with_data(prefix: &[u8]) -> Self {
        let mut data = [0xff; N];
        data[..prefix.len()].copy_from_slice(prefix);
        Self { data, writes: 0 }
    }
}

impl<const N: usize> Storage for FakeStorage<N> {
    type Error = OutOfBounds;

    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let src = self.data.get(start..start + buf.len()).ok_or(OutOfBounds)?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let dst = self
            .data
            .get_mut(start..start + data.len())
            .ok_or(OutOfBounds)?;
        dst.copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Press(KeyChord),
    Release(KeyChord),
}

#[derive(Default)]
pub struct FakeKeyboard {
    pub reports: Vec<Report>,
}

impl FakeKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Report> {
        core::mem::take(&mut self.reports)
    }
}

impl KeyReporter for FakeKeyboard {
    fn press(&mut self, chord: KeyChord) {
        self.reports.push(Report::Press(chord));
    }

    fn release(&mut self, chord: KeyChord) {
        self.reports.push(Report::Release(chord));
    }
}

/// Samples with nothing pressed.
pub fn idle() -> [KeySample; KEY_COUNT] {
    [KeySample::default(); KEY_COUNT]
}

/// Samples where `key` went down on this poll.
pub fn pressed(key: usize) -> [KeySample; KEY_COUNT] {
    let mut samples = idle();
    samples[key] = KeySample {
        pressed: true,
        edge: Some(crate::input::Edge::Pressed),
    };
    samples
}

/// Samples where `key` is still down from an earlier poll.
pub fn held(key: usize) -> [KeySample; KEY_COUNT] {
    let mut samples = idle();
    samples[key].pressed = true;
    samples
}

/// Samples where `key` came up on this poll.
pub fn released(key: usize) -> [KeySample; KEY_COUNT] {
    let mut samples = idle();
    samples[key].edge = Some(crate::input::Edge::Released);
    samples
}
